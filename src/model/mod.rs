//! Stock records shown on the stand.
//!
//! Callers construct items from here; the attribute enums live in the
//! private `attributes` module.

mod attributes;
mod item;

pub use attributes::{Color, SizeCategory};
pub use item::Item;
