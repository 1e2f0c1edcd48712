use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;

/// Placement counters kept by a stand.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StandMetrics {
    placements: u64,
    rejections: u64,
}

impl StandMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_placement(&mut self) {
        self.placements = self.placements.saturating_add(1);
    }

    pub fn record_rejection(&mut self) {
        self.rejections = self.rejections.saturating_add(1);
    }

    pub fn placements(&self) -> u64 {
        self.placements
    }

    pub fn rejections(&self) -> u64 {
        self.rejections
    }

    pub fn snapshot(&self, filled: usize, capacity: usize) -> MetricSnapshot {
        MetricSnapshot {
            placements: self.placements,
            rejections: self.rejections,
            filled,
            capacity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub placements: u64,
    pub rejections: u64,
    pub filled: usize,
    pub capacity: usize,
}

impl MetricSnapshot {
    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("placements".to_string(), json!(self.placements));
        map.insert("rejections".to_string(), json!(self.rejections));
        map.insert("filled".to_string(), json!(self.filled));
        map.insert("capacity".to_string(), json!(self.capacity));
        map
    }

    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "stand_metrics", self.as_fields())
    }
}
