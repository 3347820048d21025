use super::onnx_predictor::OnnxPredictor;
use super::scaler::FittedScaler;
use crate::domain::errors::AssetError;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use tracing::info;

/// Fixed artifact filenames, relative to the assets directory.
pub const MODEL_FILENAME: &str = "laptop_price.onnx";
pub const SCALER_FILENAME: &str = "scaler.json";

/// The loaded model + scaler pair. Read-only after load.
#[derive(Debug)]
pub struct AssetBundle {
    pub predictor: Arc<OnnxPredictor>,
    pub scaler: FittedScaler,
}

impl AssetBundle {
    /// Loads both artifacts. Either file missing is a hard failure; there is
    /// no partial load and no alternate search path.
    pub fn load(dir: &Path) -> Result<Self, AssetError> {
        let predictor = OnnxPredictor::load(&dir.join(MODEL_FILENAME))?;
        let scaler = FittedScaler::load(&dir.join(SCALER_FILENAME))?;
        info!("Assets loaded from {:?}", dir);
        Ok(Self {
            predictor: Arc::new(predictor),
            scaler,
        })
    }
}

/// Load-once cache for the asset bundle.
///
/// The first successful load wins and later calls return the cached bundle
/// without touching disk. Failed loads are not cached, so a caller can retry
/// once the missing files are in place.
pub struct AssetStore {
    dir: PathBuf,
    cell: OnceLock<AssetBundle>,
}

impl AssetStore {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            cell: OnceLock::new(),
        }
    }

    pub fn get(&self) -> Result<&AssetBundle, AssetError> {
        if let Some(bundle) = self.cell.get() {
            return Ok(bundle);
        }
        let bundle = AssetBundle::load(&self.dir)?;
        Ok(self.cell.get_or_init(|| bundle))
    }
}
