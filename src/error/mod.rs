mod types;

pub use types::{Result, StandError};
