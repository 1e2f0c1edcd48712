mod utils;

pub use utils::{display_width, fit_to_width, repeat_to_width};
