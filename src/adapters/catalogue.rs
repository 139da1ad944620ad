//! Implements CataloguePort from a JSON file.
//!
//! Shape: `{ "OT ref": { "label": ["NT ref", ...], ... }, ... }`. Key order in
//! the source document is the traversal order.

use crate::domain::{DeckError, ProphecyCatalogue};
use crate::ports::CataloguePort;
use std::path::Path;
use tokio::fs;
use tracing::info;

/// JSON file-based catalogue loader.
pub struct JsonCatalogueLoader;

impl JsonCatalogueLoader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonCatalogueLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CataloguePort for JsonCatalogueLoader {
    async fn load(&self, path: &Path) -> Result<ProphecyCatalogue, DeckError> {
        info!(path = %path.display(), "loading prophecies");
        let raw = fs::read_to_string(path)
            .await
            .map_err(|e| DeckError::CatalogueLoad(format!("read {}: {}", path.display(), e)))?;
        let catalogue: ProphecyCatalogue = serde_json::from_str(&raw)
            .map_err(|e| DeckError::CatalogueLoad(format!("parse {}: {}", path.display(), e)))?;
        info!(count = catalogue.len(), "catalogue loaded");
        Ok(catalogue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[tokio::test]
    async fn loads_catalogue_in_source_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mp.json");
        let mut f = std::fs::File::create(&path).unwrap();
        write!(
            f,
            r#"{{"Mic 5:2": {{"Born in Bethlehem": ["Matt 2:5-6"]}}, "Gen 3:15": {{}}}}"#
        )
        .unwrap();

        let loader = JsonCatalogueLoader::new();
        let catalogue = loader.load(&path).await.unwrap();
        let keys: Vec<&str> = catalogue.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["Mic 5:2", "Gen 3:15"]);
    }

    #[tokio::test]
    async fn missing_file_is_catalogue_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let loader = JsonCatalogueLoader::new();
        let err = loader.load(&dir.path().join("absent.json")).await.unwrap_err();
        assert!(matches!(err, DeckError::CatalogueLoad(_)));
    }

    #[tokio::test]
    async fn malformed_json_is_catalogue_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"Gen 3:15": ["not", "a", "group"]}"#).unwrap();
        let loader = JsonCatalogueLoader::new();
        let err = loader.load(&path).await.unwrap_err();
        assert!(matches!(err, DeckError::CatalogueLoad(_)));
    }
}
