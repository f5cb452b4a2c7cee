//! Inventory aging domain module.
//!
//! This crate contains the nightly aging rules for shop stock, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage). One
//! call to [`advance_day`] applies exactly one simulated day to every item.

pub mod aging;
pub mod category;
pub mod item;

pub use aging::{advance_day, Inventory};
pub use category::ItemCategory;
pub use item::Item;
