use crate::domain::errors::AssetError;
use crate::domain::laptop::{FEATURE_COUNT, FEATURE_NAMES};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// On-disk form of the scaler artifact.
#[derive(Debug, Deserialize)]
struct ScalerFile {
    #[serde(default)]
    version: u32,
    feature_names: Vec<String>,
    mean: Vec<f64>,
    scale: Vec<f64>,
}

/// A standard scaler fitted by the training process.
///
/// Applies `(x - mean) / scale` per feature. Read-only after load; the
/// feature order recorded in the artifact is checked against
/// [`FEATURE_NAMES`] so a stale or reordered artifact fails loudly instead
/// of corrupting predictions.
#[derive(Debug, Clone)]
pub struct FittedScaler {
    mean: [f64; FEATURE_COUNT],
    scale: [f64; FEATURE_COUNT],
}

impl FittedScaler {
    pub fn new(mean: [f64; FEATURE_COUNT], scale: [f64; FEATURE_COUNT]) -> Self {
        Self { mean, scale }
    }

    /// Pass-through scaler (mean 0, scale 1), for tests and diagnostics.
    pub fn identity() -> Self {
        Self::new([0.0; FEATURE_COUNT], [1.0; FEATURE_COUNT])
    }

    pub fn load(path: &Path) -> Result<Self, AssetError> {
        if !path.exists() {
            return Err(AssetError::MissingScaler {
                path: path.to_path_buf(),
            });
        }

        let raw = std::fs::read_to_string(path).map_err(|e| AssetError::UnreadableScaler {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let file: ScalerFile =
            serde_json::from_str(&raw).map_err(|e| AssetError::UnreadableScaler {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let scaler = Self::from_file(file)?;
        info!("Loaded scaler from {:?}", path);
        Ok(scaler)
    }

    fn from_file(file: ScalerFile) -> Result<Self, AssetError> {
        if file.feature_names.len() != FEATURE_COUNT
            || file.mean.len() != FEATURE_COUNT
            || file.scale.len() != FEATURE_COUNT
        {
            return Err(AssetError::SchemaMismatch {
                reason: format!(
                    "expected {} features, got names={} mean={} scale={} (artifact v{})",
                    FEATURE_COUNT,
                    file.feature_names.len(),
                    file.mean.len(),
                    file.scale.len(),
                    file.version,
                ),
            });
        }

        for (got, expected) in file.feature_names.iter().zip(FEATURE_NAMES) {
            if got != expected {
                return Err(AssetError::SchemaMismatch {
                    reason: format!("feature order mismatch: got '{got}', expected '{expected}'"),
                });
            }
        }

        if let Some(i) = file.scale.iter().position(|s| *s == 0.0) {
            return Err(AssetError::SchemaMismatch {
                reason: format!("zero scale for feature '{}'", FEATURE_NAMES[i]),
            });
        }

        let mut mean = [0.0; FEATURE_COUNT];
        let mut scale = [0.0; FEATURE_COUNT];
        mean.copy_from_slice(&file.mean);
        scale.copy_from_slice(&file.scale);
        Ok(Self { mean, scale })
    }

    pub fn transform(&self, raw: &[f64; FEATURE_COUNT]) -> [f64; FEATURE_COUNT] {
        let mut out = [0.0; FEATURE_COUNT];
        for i in 0..FEATURE_COUNT {
            out[i] = (raw[i] - self.mean[i]) / self.scale[i];
        }
        out
    }
}
