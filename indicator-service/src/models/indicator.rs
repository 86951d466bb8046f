use serde::{Deserialize, Serialize};

/// A categorized piece of evidence extracted from a case narrative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    pub category: String,
    /// Direct quotes from the case information.
    pub description: String,
    /// Fixed weight attached after parsing, not a model-computed confidence.
    #[serde(default)]
    pub score: u32,
}

/// Free-text summary assessment, not a numeric score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallPrognosis {
    pub assessment: String,
}

/// The structured result returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub positive_indicators: Vec<Indicator>,
    pub negative_indicators: Vec<Indicator>,
    pub overall_prognosis: OverallPrognosis,
}
