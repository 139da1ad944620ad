//! Implements ImagePort over a flat directory listing.
//!
//! Uniform pick from the process-wide generator; no seeding guarantee across
//! runs. Deterministic tests stub the port instead of seeding this adapter.

use crate::domain::DeckError;
use crate::ports::ImagePort;
use rand::Rng;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Filesystem-backed random image picker.
pub struct FsImagePicker;

impl FsImagePicker {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FsImagePicker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ImagePort for FsImagePicker {
    async fn pick_random(&self, directory: &Path) -> Result<PathBuf, DeckError> {
        // Canonicalizing up front makes the returned path absolute and folds
        // "directory inaccessible" into the same condition as "empty".
        let dir = fs::canonicalize(directory)
            .await
            .map_err(|_| DeckError::EmptyImageDir(directory.to_path_buf()))?;

        let mut entries = fs::read_dir(&dir)
            .await
            .map_err(|_| DeckError::EmptyImageDir(directory.to_path_buf()))?;

        let mut files = Vec::new();
        while let Ok(Some(entry)) = entries.next_entry().await {
            match entry.file_type().await {
                Ok(t) if t.is_file() => files.push(entry.path()),
                _ => {}
            }
        }
        if files.is_empty() {
            return Err(DeckError::EmptyImageDir(directory.to_path_buf()));
        }

        // Stable listing order so the random index is the only variable.
        files.sort();
        let index = rand::rng().random_range(0..files.len());
        Ok(files.swap_remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_directory_is_empty_image_dir_error() {
        let dir = tempfile::tempdir().unwrap();
        let picker = FsImagePicker::new();
        let err = picker.pick_random(dir.path()).await.unwrap_err();
        assert!(matches!(err, DeckError::EmptyImageDir(_)));
    }

    #[tokio::test]
    async fn missing_directory_is_empty_image_dir_error() {
        let dir = tempfile::tempdir().unwrap();
        let picker = FsImagePicker::new();
        let err = picker
            .pick_random(&dir.path().join("nope"))
            .await
            .unwrap_err();
        assert!(matches!(err, DeckError::EmptyImageDir(_)));
    }

    #[tokio::test]
    async fn picks_a_file_and_returns_absolute_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.jpg"), b"jpg").unwrap();
        std::fs::write(dir.path().join("b.jpg"), b"jpg").unwrap();
        // Subdirectories are not candidates (non-recursive listing).
        std::fs::create_dir(dir.path().join("sub")).unwrap();

        let picker = FsImagePicker::new();
        let picked = picker.pick_random(dir.path()).await.unwrap();
        assert!(picked.is_absolute());
        let name = picked.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name == "a.jpg" || name == "b.jpg");
    }
}
