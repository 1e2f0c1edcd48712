use thiserror::Error;

/// Unified result type for the stand crate.
pub type Result<T> = std::result::Result<T, StandError>;

/// Errors surfaced while building, sorting or rendering a stand.
#[derive(Debug, Error)]
pub enum StandError {
    #[error("invalid size category `{0}` (expected S, M or L)")]
    InvalidSize(char),
    #[error("stand dimensions {rows}x{cols} out of range (1 to 65536 slots)")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("configuration parse error: {0}")]
    Config(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
