//! Brand grouping and composite-key ordering.

mod core;

pub use self::core::{BrandGroup, SortKey, compare_items, group_by_brand, sort_key};
