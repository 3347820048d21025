use std::path::PathBuf;
use thiserror::Error;

/// Errors related to loading the model and scaler artifacts
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Model artifact not found at {path:?}")]
    MissingModel { path: PathBuf },

    #[error("Scaler artifact not found at {path:?}")]
    MissingScaler { path: PathBuf },

    #[error("Failed to read scaler artifact {path:?}: {reason}")]
    UnreadableScaler { path: PathBuf, reason: String },

    #[error("Failed to load ONNX model {path:?}: {reason}")]
    ModelLoad { path: PathBuf, reason: String },

    #[error("Scaler schema mismatch: {reason}")]
    SchemaMismatch { reason: String },
}

/// Errors related to encoding user selections into the feature vector
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Unknown {field} selection: '{value}'")]
    UnknownName { field: &'static str, value: String },

    #[error("Invalid {field} code {code}: must be in 0..{count}")]
    CodeOutOfRange {
        field: &'static str,
        code: usize,
        count: usize,
    },
}

/// Errors raised by the model forward pass
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Inference failed: {reason}")]
    Backend { reason: String },

    #[error("Model returned no output")]
    EmptyOutput,
}

/// Top-level error for one estimate request
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Inference(#[from] InferenceError),
}
