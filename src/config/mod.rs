//! Stand configuration.
//!
//! Everything has a default matching the reference 7x7 stand, so an empty
//! JSON object is a valid configuration.

use serde::Deserialize;

use crate::error::{Result, StandError};
use crate::geometry::Dimensions;
use crate::logging::{LogLevel, Logger};
use crate::render::{RendererSettings, TableRenderer};
use crate::stand::Stand;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StandConfig {
    pub dimensions: Dimensions,
    pub renderer: RendererSettings,
    /// Lowest level forwarded to the log sink.
    pub log_level: LogLevel,
}

impl Default for StandConfig {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::default(),
            renderer: RendererSettings::default(),
            log_level: LogLevel::Info,
        }
    }
}

impl StandConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()
    }

    pub fn validate(self) -> Result<Self> {
        self.dimensions.validate()?;
        self.renderer.table_width(self.dimensions.cols)?;
        Ok(self)
    }

    /// Empty stand wired to `logger`, filtered at the configured level.
    pub fn build_stand(&self, logger: Logger) -> Result<Stand> {
        let stand = Stand::new(self.dimensions)?;
        Ok(stand.with_logger(logger.with_min_level(self.log_level)))
    }

    pub fn build_renderer(&self) -> TableRenderer {
        TableRenderer::new(self.renderer.clone())
    }
}
