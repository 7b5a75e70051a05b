use crate::error::{GenError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Flat-file store for generated images, served back under `/static`.
///
/// Filenames are random v4 UUIDs, so collisions are not handled. There is
/// no cleanup or expiry.
#[derive(Clone)]
pub struct ImageStore {
    dir: PathBuf,
    public_base_url: String,
}

impl ImageStore {
    pub fn new(dir: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| {
            GenError::StorageError(format!("failed to create {}: {}", dir.display(), e))
        })?;

        Ok(Self {
            dir,
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write image bytes to a fresh file and return its filename.
    pub fn save(&self, bytes: &[u8]) -> Result<String> {
        let filename = format!("logo_{}.png", Uuid::new_v4());
        let path = self.dir.join(&filename);

        fs::write(&path, bytes).map_err(|e| {
            GenError::StorageError(format!("failed to write {}: {}", path.display(), e))
        })?;

        log::info!("💾 Image saved to: {}", path.display());
        Ok(filename)
    }

    /// Public URL for a previously saved file.
    pub fn url_for(&self, filename: &str) -> String {
        format!("{}/static/{}", self.public_base_url, filename)
    }
}
