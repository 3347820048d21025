use laptop_pricer::application::assets::AssetStore;
use laptop_pricer::application::pipeline::PricePipeline;
use laptop_pricer::application::predictor::PricePredictor;
use laptop_pricer::application::scaler::FittedScaler;
use laptop_pricer::domain::errors::InferenceError;
use laptop_pricer::domain::laptop::{FEATURE_COUNT, LaptopSpec};
use laptop_pricer::domain::pricing::{LowSpecDampening, PriceCategory, PricingPolicy, format_idr};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Deterministic stand-in for the trained model.
struct StubPredictor {
    prob: f64,
    calls: AtomicUsize,
}

impl StubPredictor {
    fn new(prob: f64) -> Arc<Self> {
        Arc::new(Self {
            prob,
            calls: AtomicUsize::new(0),
        })
    }
}

impl PricePredictor for StubPredictor {
    fn predict(&self, _features: &[f64; FEATURE_COUNT]) -> Result<f64, InferenceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.prob)
    }

    fn name(&self) -> &str {
        "stub"
    }

    fn version(&self) -> &str {
        "test"
    }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn pegged_policy_worked_example() {
    // Apple Ultrabook on macOS, 16 GB, 13.3", 1.2 kg
    let spec = LaptopSpec::from_names("Apple", "Ultrabook", "macOS", 16.0, 1.2, 13.3).unwrap();
    assert_eq!(spec.to_feature_vector(), [1.0, 4.0, 16.0, 1.2, 8.0, 13.3]);

    let stub = StubPredictor::new(0.7);
    let pipeline = PricePipeline::new(
        stub.clone(),
        FittedScaler::identity(),
        PricingPolicy::ExchangeRatePegged,
        None,
    );

    let estimate = pipeline.estimate(&spec).unwrap();

    assert_eq!(estimate.category, PriceCategory::Premium);
    // (1000 + 0.7 * 1300) * 17000
    assert!(close(estimate.price_idr, 32_470_000.0));
    assert_eq!(format!("{:.2}%", estimate.confidence * 100.0), "70.00%");
    assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn direct_policy_worked_example_with_dampening() {
    // Acer Notebook on Windows 10, 4 GB, 14", 1.5 kg (by raw codes)
    let spec = LaptopSpec::from_codes(0, 3, 5, 4.0, 1.5, 14.0).unwrap();

    let stub = StubPredictor::new(0.6);
    let pipeline = PricePipeline::new(
        stub,
        FittedScaler::identity(),
        PricingPolicy::DirectRupiah,
        Some(LowSpecDampening::default()),
    );

    let estimate = pipeline.estimate(&spec).unwrap();

    // ram <= 4 and type not in {Gaming, Workstation}: effective prob = 0.24
    assert_eq!(estimate.category, PriceCategory::Economy);
    assert!(close(estimate.probability, 0.24));
    assert!(close(estimate.price_idr, 5_440_000.0));
    assert_eq!(format!("{:.2}%", estimate.confidence * 100.0), "76.00%");
    assert_eq!(format_idr(estimate.price_idr), "Rp 5,440,000");
}

#[test]
fn dampening_leaves_gaming_builds_alone() {
    let spec = LaptopSpec::from_names("MSI", "Gaming", "Windows 10", 4.0, 2.5, 15.6).unwrap();

    let pipeline = PricePipeline::new(
        StubPredictor::new(0.6),
        FittedScaler::identity(),
        PricingPolicy::DirectRupiah,
        Some(LowSpecDampening::default()),
    );

    let estimate = pipeline.estimate(&spec).unwrap();

    assert_eq!(estimate.category, PriceCategory::Premium);
    assert!(close(estimate.probability, 0.6));
    // 15,000,000 + 0.6 * 15,000,000
    assert!(close(estimate.price_idr, 24_000_000.0));
}

#[test]
fn threshold_probability_resolves_to_economy() {
    let spec = LaptopSpec::from_names("Dell", "Notebook", "Linux", 8.0, 2.0, 15.6).unwrap();

    for policy in [PricingPolicy::ExchangeRatePegged, PricingPolicy::DirectRupiah] {
        let pipeline =
            PricePipeline::new(StubPredictor::new(0.5), FittedScaler::identity(), policy, None);
        let estimate = pipeline.estimate(&spec).unwrap();
        assert_eq!(estimate.category, PriceCategory::Economy);
    }
}

#[test]
fn scaler_output_feeds_the_model() {
    struct CapturingPredictor {
        seen: std::sync::Mutex<Option<[f64; FEATURE_COUNT]>>,
    }

    impl PricePredictor for CapturingPredictor {
        fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Result<f64, InferenceError> {
            *self.seen.lock().unwrap() = Some(*features);
            Ok(0.3)
        }

        fn name(&self) -> &str {
            "capturing"
        }

        fn version(&self) -> &str {
            "test"
        }
    }

    let capturing = Arc::new(CapturingPredictor {
        seen: std::sync::Mutex::new(None),
    });
    let scaler = FittedScaler::new(
        [1.0, 4.0, 16.0, 1.2, 8.0, 13.3],
        [1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
    );
    let pipeline = PricePipeline::new(
        capturing.clone(),
        scaler,
        PricingPolicy::ExchangeRatePegged,
        None,
    );

    let spec = LaptopSpec::from_names("Apple", "Ultrabook", "macOS", 16.0, 1.2, 13.3).unwrap();
    pipeline.estimate(&spec).unwrap();

    // Mean equals the raw vector, so the scaled input is all zeros.
    let seen = capturing.seen.lock().unwrap().unwrap();
    assert_eq!(seen, [0.0; FEATURE_COUNT]);
}

#[test]
fn missing_artifacts_mean_zero_inference_calls() {
    let store = AssetStore::new(PathBuf::from("definitely_missing_assets"));
    assert!(store.get().is_err());
    // No bundle, no pipeline: the estimate path is never reachable without
    // loaded artifacts, so zero inference calls were made.
}
