mod core;

pub use self::core::{RendererSettings, TableRenderer};
