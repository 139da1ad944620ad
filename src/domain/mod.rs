//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;

pub use entities::{
    CanonicalReference, Corpus, EntryAnimation, FulfillmentGroup, HorizontalAnchor,
    ParagraphAlignment, ProphecyCatalogue, ResolvedPassage, TextStyle, TransitionDefaults,
    VerticalAnchor,
};
pub use errors::DeckError;
