use std::fs;
use std::path::PathBuf;

use crate::core::error::{Error, ErrorKind, Result};

/// Directory structure under the configured index path.
#[derive(Debug, Clone)]
pub struct StorageLayout {
    pub base_dir: PathBuf,
    /// Generation images (.gen files).
    pub generations_dir: PathBuf,
    /// Current-generation pointer and other metadata.
    pub meta_dir: PathBuf,
}

impl StorageLayout {
    pub fn new(base_dir: PathBuf) -> Result<Self> {
        let generations_dir = base_dir.join("generations");
        let meta_dir = base_dir.join("meta");

        for dir in [&generations_dir, &meta_dir] {
            fs::create_dir_all(dir).map_err(|e| {
                Error::new(
                    ErrorKind::Storage,
                    format!("cannot create index directory {}: {}", dir.display(), e),
                )
            })?;
        }

        Ok(StorageLayout {
            base_dir,
            generations_dir,
            meta_dir,
        })
    }

    pub fn generation_path(&self, version: u64) -> PathBuf {
        self.generations_dir.join(format!("{:08}.gen", version))
    }

    pub fn current_path(&self) -> PathBuf {
        self.meta_dir.join("current")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_directories_on_open() {
        let dir = TempDir::new().unwrap();
        let layout = StorageLayout::new(dir.path().join("index")).unwrap();
        assert!(layout.generations_dir.is_dir());
        assert!(layout.meta_dir.is_dir());
        assert!(
            layout
                .generation_path(3)
                .to_string_lossy()
                .ends_with("00000003.gen")
        );
    }

    #[test]
    fn unusable_path_is_a_storage_error() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("occupied");
        std::fs::write(&file_path, b"not a directory").unwrap();
        let err = StorageLayout::new(file_path).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Storage);
    }
}
