use crate::core::Storage;
use crate::utils::error::{MergeError, Result};
use std::fs;
use std::path::PathBuf;

/// Reads input files from disk. Relative paths resolve against `base_path`;
/// absolute paths are used as given.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(".")
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.base_path.join(path);
        tracing::debug!("Reading {}", full_path.display());
        fs::read(&full_path).map_err(|source| MergeError::FileAccess {
            path: path.to_string(),
            source,
        })
    }
}
