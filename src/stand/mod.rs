//! Fixed-capacity display stand.
//!
//! The grid is stored flat in row-major order; the implementation lives in
//! the private `core` module.

mod core;

pub use self::core::{Placement, Stand};
