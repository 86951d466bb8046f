pub mod indicator;

pub use indicator::{ExtractionResult, Indicator, OverallPrognosis};
