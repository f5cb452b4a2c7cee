//! `innkeeper-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the value objects shared by the inventory rules and the domain error model.

pub mod error;
pub mod quality;
pub mod sell_in;

pub use error::{DomainError, DomainResult};
pub use quality::Quality;
pub use sell_in::SellIn;
