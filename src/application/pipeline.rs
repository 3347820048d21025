use super::assets::AssetBundle;
use super::predictor::PricePredictor;
use super::scaler::FittedScaler;
use crate::domain::errors::PredictionError;
use crate::domain::laptop::LaptopSpec;
use crate::domain::pricing::{Estimate, LowSpecDampening, PricingPolicy};
use std::sync::Arc;
use tracing::debug;

/// End-to-end estimate pipeline: encode -> scale -> infer -> resolve.
///
/// Pure with respect to its inputs: the same spec against the same artifacts
/// always produces the same estimate. No retries, no timeouts; any failure
/// in the forward pass surfaces as an error for this request.
pub struct PricePipeline {
    predictor: Arc<dyn PricePredictor>,
    scaler: FittedScaler,
    policy: PricingPolicy,
    dampening: Option<LowSpecDampening>,
}

impl PricePipeline {
    pub fn new(
        predictor: Arc<dyn PricePredictor>,
        scaler: FittedScaler,
        policy: PricingPolicy,
        dampening: Option<LowSpecDampening>,
    ) -> Self {
        Self {
            predictor,
            scaler,
            policy,
            dampening,
        }
    }

    /// Builds a pipeline over loaded artifacts.
    pub fn from_bundle(
        bundle: &AssetBundle,
        policy: PricingPolicy,
        dampening: Option<LowSpecDampening>,
    ) -> Self {
        Self::new(
            bundle.predictor.clone(),
            bundle.scaler.clone(),
            policy,
            dampening,
        )
    }

    pub fn estimate(&self, spec: &LaptopSpec) -> Result<Estimate, PredictionError> {
        let raw = spec.to_feature_vector();
        let scaled = self.scaler.transform(&raw);
        let prob = self.predictor.predict(&scaled)?;
        debug!(
            "Model '{}' returned prob={:.4} for {:?}",
            self.predictor.name(),
            prob,
            raw
        );

        let effective = match &self.dampening {
            Some(dampening) => dampening.apply(spec, prob),
            None => prob,
        };

        Ok(self.policy.resolve(effective))
    }
}
