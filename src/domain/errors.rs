//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these. A reference that fails to
//! parse or is absent from the corpus is NOT an error — the resolver returns
//! `None` and the walker skips that single reference.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    /// Catalogue file missing or structurally malformed. Aborts before any
    /// slide is produced.
    #[error("catalogue load failed: {0}")]
    CatalogueLoad(String),

    /// A corpus file could not be read or parsed.
    #[error("scripture corpus error: {0}")]
    Corpus(String),

    /// The images directory is empty or unreadable while a slide requires a
    /// background. No solid-fill fallback is applied.
    #[error("no images found in {}", .0.display())]
    EmptyImageDir(PathBuf),

    /// A background image could not be read; fatal to the layout being built.
    #[error("layout background unusable: {0}")]
    LayoutAsset(String),

    /// A host document operation failed (open, append, mutate).
    #[error("deck host error: {0}")]
    Host(String),

    /// The save target is unwritable. Any generated slides exist only in
    /// memory at this point.
    #[error("deck save failed: {0}")]
    Persist(String),
}
