// File: crates/delegation-core/src/assets.rs
// Summary: Decoded image cache for sport icons, flag, and logo.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use skia_safe as skia;

use crate::error::{ChartError, Result};

/// Decodes each image file once per store. Missing files are errors.
#[derive(Default)]
pub struct AssetStore {
    cache: HashMap<PathBuf, skia::Image>,
}

impl AssetStore {
    pub fn new() -> Self { Self::default() }

    /// Icon path convention: `<sports_dir>/<sport>.png`.
    pub fn sport_icon_path(sports_dir: &Path, sport: &str) -> PathBuf {
        sports_dir.join(format!("{sport}.png"))
    }

    pub fn load(&mut self, path: &Path) -> Result<skia::Image> {
        if let Some(img) = self.cache.get(path) {
            return Ok(img.clone());
        }
        let bytes = std::fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ChartError::MissingAsset { path: path.to_path_buf() },
            _ => ChartError::Io(e),
        })?;
        #[allow(deprecated)]
        let img = skia::Image::from_encoded(skia::Data::new_copy(&bytes))
            .ok_or_else(|| ChartError::AssetDecode { path: path.to_path_buf() })?;
        tracing::debug!(path = %path.display(), width = img.width(), height = img.height(), "decoded asset");
        self.cache.insert(path.to_path_buf(), img.clone());
        Ok(img)
    }

    pub fn sport_icon(&mut self, sports_dir: &Path, sport: &str) -> Result<skia::Image> {
        self.load(&Self::sport_icon_path(sports_dir, sport))
    }

    pub fn len(&self) -> usize { self.cache.len() }

    pub fn is_empty(&self) -> bool { self.cache.is_empty() }
}
