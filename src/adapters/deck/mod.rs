//! Deck host adapters.

pub mod document;
pub mod json_deck;

pub use document::{DeckDocument, LayoutDoc, LayoutFill, PlaceholderBox, SlideDoc, TextShapeDoc};
pub use json_deck::JsonDeck;
