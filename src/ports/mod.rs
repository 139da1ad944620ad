//! Port traits. API boundaries for the hexagon.
//!
//! Outbound: called by application into infrastructure. The host presentation
//! API, resolver, image picker and catalogue loader all live behind these
//! seams so the pipeline can be exercised with in-test stubs.

pub mod outbound;

pub use outbound::{
    CataloguePort, DeckPort, ImagePort, LayoutRef, PlaceholderRef, ScripturePort, SlideRef,
};
