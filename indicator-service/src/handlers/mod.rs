pub mod health;
pub mod indicators;

pub use health::health_check;
pub use indicators::{extract_indicators, preflight};
