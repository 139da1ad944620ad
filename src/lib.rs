//! prophecy-deck: prophecy catalogue to animated slide deck, with Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
