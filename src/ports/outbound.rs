//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{
    CanonicalReference, Corpus, DeckError, EntryAnimation, ProphecyCatalogue, TextStyle,
    TransitionDefaults,
};
use std::path::{Path, PathBuf};

/// Handle to a custom layout appended to the deck. Carries the identity of the
/// layout's single placeholder text box, so the assembler never addresses
/// shapes by bare positional index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutRef {
    pub layout_index: usize,
    pub placeholder: PlaceholderRef,
}

/// Identity of a placeholder shape within a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderRef(pub usize);

/// Handle to a slide appended to the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideRef(pub usize);

/// Catalogue loader. Deserializes the prophecy catalogue from disk.
#[async_trait::async_trait]
pub trait CataloguePort: Send + Sync {
    /// Load and deserialize the catalogue. Any structural error is fatal.
    async fn load(&self, path: &Path) -> Result<ProphecyCatalogue, DeckError>;
}

/// Scripture reference resolver. Turns a free-text citation into canonical
/// passage text from a selected corpus.
#[async_trait::async_trait]
pub trait ScripturePort: Send + Sync {
    /// Parse a free-text citation. `None` when unparseable — callers treat
    /// this the same as a reference absent from the corpus.
    async fn try_parse(&self, text: &str) -> Option<CanonicalReference>;

    /// Look up the passage text. `Ok(None)` means not present in the corpus.
    async fn lookup(
        &self,
        reference: &CanonicalReference,
        corpus: Corpus,
    ) -> Result<Option<String>, DeckError>;
}

/// Background image picker. The trait is the injectable-randomness seam:
/// production picks uniformly at random, tests supply fixed sequences.
#[async_trait::async_trait]
pub trait ImagePort: Send + Sync {
    /// Pick one file from the directory (non-recursive). Returns an absolute
    /// path. `EmptyImageDir` if the directory has no files or is unreadable.
    async fn pick_random(&self, directory: &Path) -> Result<PathBuf, DeckError>;
}

/// Host presentation document. One deck per adapter instance, opened or
/// created by the adapter's constructor. Slides and layouts are append-only;
/// indices are assigned in call order.
#[async_trait::async_trait]
pub trait DeckPort: Send + Sync {
    /// Apply deck-wide transition defaults to the slide master. Called exactly
    /// once, before any slide or layout exists.
    async fn apply_transition(&self, defaults: &TransitionDefaults) -> Result<(), DeckError>;

    /// Append a new custom layout. Never reuses an existing layout, even for
    /// an identical background path. `Some(path)` sets an image fill
    /// (`LayoutAsset` error if unreadable); `None` sets solid black.
    async fn add_layout(&self, background: Option<&Path>) -> Result<LayoutRef, DeckError>;

    /// Append a new slide using the given layout, at position count + 1.
    async fn add_slide(&self, layout: LayoutRef) -> Result<SlideRef, DeckError>;

    /// Set the text of the slide's placeholder verbatim and apply the style.
    async fn set_slide_text(
        &self,
        slide: SlideRef,
        placeholder: PlaceholderRef,
        text: &str,
        style: &TextStyle,
    ) -> Result<(), DeckError>;

    /// Apply the entry animation to the slide's placeholder. Timing fields
    /// left as `None` stay unset in the document.
    async fn animate_slide_text(
        &self,
        slide: SlideRef,
        placeholder: PlaceholderRef,
        animation: &EntryAnimation,
    ) -> Result<(), DeckError>;

    /// Persist the deck to its target path, overwriting if present.
    async fn save(&self) -> Result<(), DeckError>;

    /// Make the host visible to the user. Best-effort — failures are logged
    /// by the caller, never fatal.
    async fn present(&self) -> Result<(), DeckError>;
}
