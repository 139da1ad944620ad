//! Scripture resolver adapters.

pub mod corpus;

pub use corpus::JsonCorpusResolver;
