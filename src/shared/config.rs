//! Application configuration. Input paths, deck target, traversal cap.
//!
//! Everything the original hard-coded (catalogue file, images directory,
//! corpus files, output path) is a configuration input here.

use serde::Deserialize;

/// Default cap on top-level prophecies contributing slides.
pub const DEFAULT_MAX_PROPHECIES: usize = 10;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Path to the prophecy catalogue JSON. Read from PROPHECY_DECK_CATALOGUE_PATH.
    pub catalogue_path: Option<String>,

    /// Directory of candidate background images. Read from PROPHECY_DECK_IMAGES_DIR.
    pub images_dir: Option<String>,

    /// Target path for the generated deck document. Read from PROPHECY_DECK_OUTPUT_PATH.
    pub output_path: Option<String>,

    /// KJV corpus JSON (reference -> passage text). Read from PROPHECY_DECK_KJV_CORPUS.
    pub kjv_corpus: Option<String>,

    /// Optional Hebrew corpus; loaded but unused by the active pipeline.
    /// Read from PROPHECY_DECK_TANACH_CORPUS.
    #[serde(default)]
    pub tanach_corpus: Option<String>,

    /// Optional Greek NT corpus; loaded but unused by the active pipeline.
    /// Read from PROPHECY_DECK_GREEK_NT_CORPUS.
    #[serde(default)]
    pub greek_nt_corpus: Option<String>,

    /// Open an existing deck instead of creating a blank one.
    /// Read from PROPHECY_DECK_OPEN_EXISTING.
    #[serde(default)]
    pub open_existing: Option<bool>,

    /// Traversal cap on top-level prophecies (default 10).
    /// Read from PROPHECY_DECK_MAX_PROPHECIES.
    #[serde(default)]
    pub max_prophecies: Option<usize>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("PROPHECY_DECK"));
        if let Ok(path) = std::env::var("PROPHECY_DECK_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the traversal cap. Defaults to 10 if unset.
    pub fn max_prophecies_or_default(&self) -> usize {
        self.max_prophecies.unwrap_or(DEFAULT_MAX_PROPHECIES)
    }

    /// Returns true when an existing deck should be opened rather than a
    /// blank one created.
    pub fn open_existing_or_default(&self) -> bool {
        self.open_existing.unwrap_or(false)
    }
}
