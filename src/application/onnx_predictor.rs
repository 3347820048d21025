use super::predictor::PricePredictor;
use crate::domain::errors::{AssetError, InferenceError};
use crate::domain::laptop::FEATURE_COUNT;
use ort::session::Session;
use std::path::Path;
use std::sync::Mutex;
use tracing::info;

/// Pre-trained sequence model behind ONNX Runtime.
///
/// The network was exported with input shape (batch, 6, 1) and a single
/// sigmoid output unit. A missing or unloadable artifact is a hard failure:
/// the caller must halt instead of falling back to a neutral score.
#[derive(Debug)]
pub struct OnnxPredictor {
    session: Mutex<Session>,
}

impl OnnxPredictor {
    pub fn load(model_path: &Path) -> Result<Self, AssetError> {
        if !model_path.exists() {
            return Err(AssetError::MissingModel {
                path: model_path.to_path_buf(),
            });
        }

        let mut builder = Session::builder().map_err(|e| AssetError::ModelLoad {
            path: model_path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let session = builder
            .commit_from_file(model_path)
            .map_err(|e| AssetError::ModelLoad {
                path: model_path.to_path_buf(),
                reason: e.to_string(),
            })?;

        info!("Loaded ONNX model from {:?}", model_path);
        Ok(Self {
            session: Mutex::new(session),
        })
    }
}

impl PricePredictor for OnnxPredictor {
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Result<f64, InferenceError> {
        let flat_data: Vec<f32> = features.iter().map(|v| *v as f32).collect();

        // (batch=1, timesteps=FEATURE_COUNT, channels=1)
        let shape = vec![1, FEATURE_COUNT, 1];

        let input_value = ort::value::Value::from_array((shape.as_slice(), flat_data))
            .map_err(|e| InferenceError::Backend {
                reason: format!("Input value creation failed: {e}"),
            })?;
        let inputs = ort::inputs![input_value];

        let mut session = self.session.lock().map_err(|e| InferenceError::Backend {
            reason: format!("Mutex lock failed: {e}"),
        })?;

        let outputs = session.run(inputs).map_err(|e| InferenceError::Backend {
            reason: e.to_string(),
        })?;

        let output_value = outputs
            .iter()
            .next()
            .map(|(_, v)| v)
            .ok_or(InferenceError::EmptyOutput)?;
        let data = output_value
            .try_extract_tensor::<f32>()
            .map_err(|e| InferenceError::Backend {
                reason: e.to_string(),
            })?;

        // First batch element, first output unit.
        let prob = data.1.iter().next().ok_or(InferenceError::EmptyOutput)?;
        Ok(*prob as f64)
    }

    fn name(&self) -> &str {
        "ONNX Runtime (CNN-GRU)"
    }

    fn version(&self) -> &str {
        "v1.0"
    }
}
