//! Adapters: infrastructure implementations of the outbound ports.

pub mod catalogue;
pub mod deck;
pub mod images;
pub mod scripture;

pub use catalogue::JsonCatalogueLoader;
pub use deck::JsonDeck;
pub use images::FsImagePicker;
pub use scripture::JsonCorpusResolver;
