//! Footwear display stand.
//!
//! Items are placed into a fixed grid, grouped by brand, ordered by size,
//! price and color, and rendered as a bordered text table.
//!
//! ```
//! use shoe_stand::{Color, Item, Stand, TableRenderer};
//!
//! let mut stand = Stand::standard();
//! stand.place(Item::new("Nike", 'M', 50, Color::Black));
//! stand.place(Item::new("Nike", 'M', 40, Color::Blue));
//!
//! let table = TableRenderer::with_default().render(&stand)?;
//! assert!(table.find("$ 40").unwrap() < table.find("$ 50").unwrap());
//! # Ok::<(), shoe_stand::StandError>(())
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod geometry;
pub mod grouping;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod render;
pub mod stand;
pub mod width;

pub use catalog::sample_items;
pub use config::StandConfig;
pub use error::{Result, StandError};
pub use geometry::Dimensions;
pub use grouping::{BrandGroup, SortKey, compare_items, group_by_brand, sort_key};
pub use logging::{LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult};
pub use metrics::{MetricSnapshot, StandMetrics};
pub use model::{Color, Item, SizeCategory};
pub use render::{RendererSettings, TableRenderer};
pub use stand::{Placement, Stand};
pub use width::display_width;
