//! Prompt template and sampling configuration for narrative generation.
//!
//! Kept as data so prompt iterations never touch handler logic.

use service_core::genai::GenerationParams;

/// Fixed prompt asking the model for a ~500 word caseworker narrative.
pub const NARRATIVE_PROMPT: &str = "Generate a case worker narrative (not overly formal) that hits on some of these indicators, leaning either positive or negative:

    Positive Indicators:
    1. Strong Parent-Child Relationship
    2. Parental Stability and Functioning
    3. Supportive Social Systems
    4. Recent and Situational Problems
    5. Parent's Positive Childhood Experiences

    Negative Indicators:
    1. Extreme Abuse or Neglect
    2. Severe and Untreated Mental Illness
    3. Chronic and Persistent Problems
    4. Parental Ambivalence and Lack of Commitment
    5. Cumulative Risk Factors

    The narrative should be about 500 words long and include details about the parent, child, and their situation.";

/// Sampling parameters for narrative generation: high temperature for
/// varied narratives, large output cap.
pub fn narrative_params() -> GenerationParams {
    GenerationParams {
        temperature: Some(1.0),
        top_p: Some(0.95),
        top_k: None,
        max_output_tokens: Some(8192),
    }
}
