use crate::domain::errors::InferenceError;
use crate::domain::laptop::FEATURE_COUNT;

/// Interface for the trained price classifier
pub trait PricePredictor: Send + Sync {
    /// Probability of the premium class (0.0 to 1.0) for one scaled
    /// feature vector.
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Result<f64, InferenceError>;

    /// Get model name/type
    fn name(&self) -> &str;

    /// Get model version/id
    fn version(&self) -> &str;
}
