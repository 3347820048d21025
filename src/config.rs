use crate::domain::pricing::PricingPolicy;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding `laptop_price.onnx` and `scaler.json`.
    pub assets_dir: PathBuf,
    pub pricing_policy: PricingPolicy,
    pub low_spec_dampening: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let assets_dir = env::var("ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("assets"));

        let policy_str = env::var("PRICING_POLICY").unwrap_or_else(|_| "pegged".to_string());
        let pricing_policy = PricingPolicy::from_str(&policy_str)?;

        // Unset follows the selected policy; an explicit value always wins.
        let low_spec_dampening = match env::var("LOW_SPEC_DAMPENING") {
            Ok(v) => v
                .parse::<bool>()
                .context("Failed to parse LOW_SPEC_DAMPENING")?,
            Err(_) => pricing_policy.default_dampening(),
        };

        Ok(Self {
            assets_dir,
            pricing_policy,
            low_spec_dampening,
        })
    }
}
