// Artifact loading and the load-once cache
pub mod assets;

// Predictor interface and ONNX implementation
pub mod onnx_predictor;
pub mod predictor;

// Fitted feature scaler
pub mod scaler;

// End-to-end estimate pipeline
pub mod pipeline;
