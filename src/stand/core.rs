use serde_json::Value;

use crate::error::Result;
use crate::geometry::Dimensions;
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv, json_str};
use crate::metrics::StandMetrics;
use crate::model::Item;

const LOG_TARGET: &str = "stand";

/// Outcome of [`Stand::place`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Stored in the first free slot.
    Placed { row: usize, col: usize },
    /// The stand was full; the item was dropped.
    Rejected,
}

/// Display stand holding at most `rows * cols` items.
///
/// Items fill the first empty slot scanning row by row. Nothing is ever
/// removed, so the fill count only grows.
///
/// A new stand logs warnings to stderr; [`Stand::with_logger`] replaces that.
pub struct Stand {
    dimensions: Dimensions,
    slots: Vec<Option<Item>>,
    filled: usize,
    metrics: StandMetrics,
    logger: Logger,
}

impl Stand {
    pub fn new(dimensions: Dimensions) -> Result<Self> {
        Ok(Self::empty(dimensions.validate()?))
    }

    /// The reference 7x7 stand.
    pub fn standard() -> Self {
        Self::empty(Dimensions::STANDARD)
    }

    fn empty(dimensions: Dimensions) -> Self {
        let mut slots = Vec::with_capacity(dimensions.capacity());
        slots.resize_with(dimensions.capacity(), || None);
        Self {
            dimensions,
            slots,
            filled: 0,
            metrics: StandMetrics::new(),
            logger: Logger::stderr().with_min_level(LogLevel::Warn),
        }
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    pub fn place(&mut self, item: Item) -> Placement {
        let Some(index) = self.slots.iter().position(Option::is_none) else {
            self.metrics.record_rejection();
            self.emit(
                LogLevel::Warn,
                "stand is full; item dropped",
                [
                    json_str("brand", item.brand()),
                    json_kv("capacity", self.capacity()),
                ],
            );
            return Placement::Rejected;
        };

        let (row, col) = self.dimensions.position_of(index);
        self.emit(
            LogLevel::Debug,
            "item placed",
            [
                json_str("brand", item.brand()),
                json_kv("row", row),
                json_kv("col", col),
            ],
        );
        self.slots[index] = Some(item);
        self.filled += 1;
        self.metrics.record_placement();
        Placement::Placed { row, col }
    }

    pub fn is_full(&self) -> bool {
        self.filled == self.capacity()
    }

    pub fn len(&self) -> usize {
        self.filled
    }

    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Occupied slots in row-major order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.slots.iter().flatten()
    }

    pub fn metrics(&self) -> &StandMetrics {
        &self.metrics
    }

    /// Log the current metrics snapshot at `info`.
    pub fn log_metrics(&self) {
        let snapshot = self.metrics.snapshot(self.filled, self.capacity());
        let _ = self.logger.log_with_fields(
            LogLevel::Info,
            LOG_TARGET,
            "stand_metrics",
            snapshot.as_fields(),
        );
    }

    fn emit<const N: usize>(
        &self,
        level: LogLevel,
        message: &str,
        fields: [(String, Value); N],
    ) {
        if self.logger.enabled(level) {
            let event = event_with_fields(level, LOG_TARGET, message, fields);
            let _ = self.logger.log_event(event);
        }
    }
}

impl Default for Stand {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StandError;
    use crate::logging::MemorySink;
    use crate::model::Color;

    fn nike(price: u32) -> Item {
        Item::new("Nike", 'M', price, Color::Black)
    }

    #[test]
    fn default_stand_warns_without_explicit_logger() {
        let stand = Stand::default();
        assert_eq!(stand.dimensions(), Dimensions::STANDARD);
        assert!(stand.logger().enabled(LogLevel::Warn));
        assert!(!stand.logger().enabled(LogLevel::Debug));

        let sized = Stand::new(Dimensions::new(1, 1)).unwrap();
        assert!(sized.logger().enabled(LogLevel::Warn));
    }

    #[test]
    fn new_stand_is_empty() {
        let stand = Stand::standard();
        assert!(stand.is_empty());
        assert!(!stand.is_full());
        assert_eq!(stand.capacity(), 49);
        assert_eq!(stand.items().count(), 0);
    }

    #[test]
    fn zero_sized_stand_is_rejected() {
        assert!(matches!(
            Stand::new(Dimensions::new(0, 4)),
            Err(StandError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn placement_fills_row_major() {
        let mut stand = Stand::new(Dimensions::new(2, 2)).unwrap();
        assert_eq!(stand.place(nike(1)), Placement::Placed { row: 0, col: 0 });
        assert_eq!(stand.place(nike(2)), Placement::Placed { row: 0, col: 1 });
        assert_eq!(stand.place(nike(3)), Placement::Placed { row: 1, col: 0 });
        assert_eq!(stand.place(nike(4)), Placement::Placed { row: 1, col: 1 });
        assert!(stand.is_full());

        let prices: Vec<u32> = stand.items().map(Item::price).collect();
        assert_eq!(prices, vec![1, 2, 3, 4]);
    }

    #[test]
    fn fill_count_tracks_placements() {
        for count in 0..=12 {
            let mut stand = Stand::new(Dimensions::new(3, 4)).unwrap();
            for price in 0..count {
                stand.place(nike(price));
            }
            assert_eq!(stand.len(), count as usize);
            assert_eq!(stand.items().count(), count as usize);
            assert_eq!(stand.is_full(), count == 12);
        }
    }

    #[test]
    fn twenty_one_items_on_standard_stand() {
        let mut stand = Stand::standard();
        for price in 0..21 {
            stand.place(nike(price));
        }
        assert_eq!(stand.len(), 21);
        assert!(!stand.is_full());
    }

    #[test]
    fn full_stand_rejects_and_logs_warning() {
        let sink = MemorySink::new();
        let mut stand = Stand::new(Dimensions::new(1, 2))
            .unwrap()
            .with_logger(Logger::new(sink.clone()).with_min_level(LogLevel::Warn));
        stand.place(nike(1));
        stand.place(nike(2));

        assert_eq!(stand.place(nike(3)), Placement::Rejected);
        assert_eq!(stand.place(nike(4)), Placement::Rejected);
        assert_eq!(stand.len(), 2);
        assert!(stand.is_full());
        assert!(stand.items().all(|item| item.price() <= 2));
        assert_eq!(stand.metrics().placements(), 2);
        assert_eq!(stand.metrics().rejections(), 2);

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].level, LogLevel::Warn);
        assert_eq!(events[0].message, "stand is full; item dropped");
        assert_eq!(events[0].fields["brand"], "Nike");
        assert_eq!(events[0].fields["capacity"], 2);
    }

    #[test]
    fn placements_log_at_debug() {
        let sink = MemorySink::new();
        let mut stand = Stand::standard().with_logger(Logger::new(sink.clone()));
        stand.place(nike(1));

        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level, LogLevel::Debug);
        assert_eq!(events[0].fields["row"], 0);
        assert_eq!(events[0].fields["col"], 0);
    }

    #[test]
    fn metrics_snapshot_is_logged() {
        let sink = MemorySink::new();
        let mut stand = Stand::standard()
            .with_logger(Logger::new(sink.clone()).with_min_level(LogLevel::Info));
        stand.place(nike(1));
        stand.log_metrics();

        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].message, "stand_metrics");
        assert_eq!(events[0].fields["filled"], 1);
    }
}
