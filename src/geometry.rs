use serde::Deserialize;

use crate::error::{Result, StandError};

/// Shelf grid measured in item slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Dimensions {
    /// The reference 7x7 stand.
    pub const STANDARD: Dimensions = Dimensions::new(7, 7);

    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Largest number of slots a stand may have.
    pub const MAX_SLOTS: usize = 1 << 16;

    /// Reject grids with no slots or more than [`Self::MAX_SLOTS`].
    pub fn validate(self) -> Result<Self> {
        match self.rows.checked_mul(self.cols) {
            Some(slots) if slots > 0 && slots <= Self::MAX_SLOTS => Ok(self),
            _ => Err(StandError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            }),
        }
    }

    /// `rows * cols`; exact for any grid that passed [`Self::validate`].
    pub fn capacity(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    /// Row-major `(row, col)` coordinates of a flat slot index.
    pub fn position_of(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::STANDARD
    }
}
