pub mod extraction;

pub use extraction::{clean_model_response, IndicatorExtractor};
