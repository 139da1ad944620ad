//! Application use cases. Orchestrate domain logic via ports.

pub mod assembler;
pub mod lifecycle;
pub mod walker;

pub use assembler::SlideAssembler;
pub use lifecycle::DeckSession;
pub use walker::{CatalogueWalker, WalkStats};
