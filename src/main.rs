//! Laptop price estimator CLI
//!
//! Runs one synchronous estimate over the pre-trained model and scaler
//! artifacts: encode the spec, normalize, infer, resolve a Premium/Economy
//! category with a Rupiah price and a confidence percentage.
//!
//! # Usage
//! ```sh
//! laptop-pricer --brand Apple --type Ultrabook --os macOS --ram 16 --screen 13.3 --weight 1.2
//! ```
//!
//! # Environment Variables
//! - `ASSETS_DIR` - Directory with `laptop_price.onnx` and `scaler.json` (default: assets)
//! - `PRICING_POLICY` - `pegged` or `direct` (default: pegged)
//! - `LOW_SPEC_DAMPENING` - Force the low-spec override on/off (default: follows policy)

use anyhow::{Context, Result, bail};
use clap::Parser;
use laptop_pricer::application::assets::AssetStore;
use laptop_pricer::application::pipeline::PricePipeline;
use laptop_pricer::config::Config;
use laptop_pricer::domain::catalog;
use laptop_pricer::domain::laptop::LaptopSpec;
use laptop_pricer::domain::pricing::{LowSpecDampening, format_idr};
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Laptop brand (e.g. "Apple"); see --list for valid values
    #[arg(long)]
    brand: String,

    /// Laptop type (e.g. "Ultrabook")
    #[arg(long = "type")]
    type_name: String,

    /// Operating system (e.g. "macOS")
    #[arg(long)]
    os: String,

    /// RAM in GB (2-64)
    #[arg(long, default_value_t = 8.0)]
    ram: f64,

    /// Screen size in inches (10.0-18.0)
    #[arg(long, default_value_t = 15.6)]
    screen: f64,

    /// Weight in kg (0.5-5.0)
    #[arg(long, default_value_t = 1.5)]
    weight: f64,

    /// Print the valid brand/type/OS selections and exit
    #[arg(long)]
    list: bool,
}

/// Input-collection ranges; the pipeline itself does not constrain numerics.
fn validate_ranges(cli: &Cli) -> Result<()> {
    if !(2.0..=64.0).contains(&cli.ram) {
        bail!("RAM must be between 2 and 64 GB, got: {}", cli.ram);
    }
    if !(10.0..=18.0).contains(&cli.screen) {
        bail!("Screen must be between 10.0 and 18.0 inches, got: {}", cli.screen);
    }
    if !(0.5..=5.0).contains(&cli.weight) {
        bail!("Weight must be between 0.5 and 5.0 kg, got: {}", cli.weight);
    }
    Ok(())
}

fn print_catalog() {
    println!("Brands:  {}", catalog::BRANDS.join(", "));
    println!("Types:   {}", catalog::TYPE_NAMES.join(", "));
    println!("OS:      {}", catalog::OS_NAMES.join(", "));
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    let cli = Cli::parse();

    if cli.list {
        print_catalog();
        return Ok(());
    }
    validate_ranges(&cli)?;

    let config = Config::from_env()?;
    info!(
        "Policy: {:?}, dampening: {}, assets: {:?}",
        config.pricing_policy, config.low_spec_dampening, config.assets_dir
    );

    let spec = LaptopSpec::from_names(
        &cli.brand,
        &cli.type_name,
        &cli.os,
        cli.ram,
        cli.weight,
        cli.screen,
    )?;

    let store = AssetStore::new(config.assets_dir.clone());
    let bundle = store.get().with_context(|| {
        format!(
            "Model or scaler artifact missing; place laptop_price.onnx and scaler.json in {:?}",
            config.assets_dir
        )
    })?;

    let dampening = config.low_spec_dampening.then(LowSpecDampening::default);
    let pipeline = PricePipeline::from_bundle(bundle, config.pricing_policy, dampening);

    let estimate = pipeline.estimate(&spec)?;

    println!("{} EDITION", estimate.category.label().to_uppercase());
    println!("Estimated market price: {}", format_idr(estimate.price_idr));
    println!("Confidence: {:.2}%", estimate.confidence * 100.0);

    Ok(())
}
