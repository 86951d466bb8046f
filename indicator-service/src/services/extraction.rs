//! Model-response cleanup and indicator extraction.
//!
//! The cleanup step is the one heuristic piece of logic in the service and
//! is isolated here behind [`clean_model_response`] so it stays well tested.

use crate::models::ExtractionResult;
use crate::prompts;
use once_cell::sync::Lazy;
use regex::Regex;
use service_core::genai::{ProviderError, TextProvider};
use std::sync::Arc;

/// Matches ```json / ``` markdown fencing around the JSON object.
static FENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"```json\s*|\s*```").unwrap());

/// Matches the adjacent-quote string-concatenation artifact some model
/// versions emit inside JSON string values, e.g. `"part one" + "part two"`.
/// Known to be fragile: legitimate descriptions containing an empty string
/// or adjacent quoted substrings would be corrupted.
static QUOTE_CONCAT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#""\s*\+?\s*""#).unwrap());

/// Strip markdown fencing and the quote-concatenation artifact from a raw
/// model response. This is artifact cleanup, not general JSON repair.
pub fn clean_model_response(raw: &str) -> String {
    let without_fences = FENCE_RE.replace_all(raw, "");
    let trimmed = without_fences.trim();
    QUOTE_CONCAT_RE.replace_all(trimmed, "").into_owned()
}

/// Extracts reunification indicators from case narratives.
#[derive(Clone)]
pub struct IndicatorExtractor {
    provider: Arc<dyn TextProvider>,
}

impl IndicatorExtractor {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self { provider }
    }

    /// Ask the model for reunification indicators in `case_info`.
    ///
    /// Returns `Ok(None)` when the model's response cannot be parsed as the
    /// expected JSON shape; this is the one deliberate local-recovery point.
    /// Provider failures propagate as `Err`.
    pub async fn extract(
        &self,
        case_info: &str,
    ) -> Result<Option<ExtractionResult>, ProviderError> {
        let prompt = prompts::extraction_prompt(case_info);
        let response = self
            .provider
            .generate(&prompt, &prompts::extraction_params())
            .await?;

        let cleaned = clean_model_response(&response);

        match serde_json::from_str::<ExtractionResult>(&cleaned) {
            Ok(mut result) => {
                // Every indicator carries a fixed weight of 1.
                for indicator in result
                    .positive_indicators
                    .iter_mut()
                    .chain(result.negative_indicators.iter_mut())
                {
                    indicator.score = 1;
                }
                Ok(Some(result))
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    response_text = %response,
                    cleaned_response = %cleaned,
                    "Failed to parse model response as indicator JSON"
                );
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::clean_model_response;

    #[test]
    fn strips_json_fencing() {
        let raw = "```json\n{\"a\": 1}\n```";
        assert_eq!(clean_model_response(raw), "{\"a\": 1}");
    }

    #[test]
    fn strips_bare_fencing() {
        let raw = "```\n{\"a\": 1}\n```";
        assert_eq!(clean_model_response(raw), "{\"a\": 1}");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let raw = "  \n{\"a\": 1}\n  ";
        assert_eq!(clean_model_response(raw), "{\"a\": 1}");
    }

    #[test]
    fn removes_quote_concatenation_with_plus() {
        let raw = r#"{"description": "went to school" + "came home safe"}"#;
        assert_eq!(
            clean_model_response(raw),
            r#"{"description": "went to schoolcame home safe"}"#
        );
    }

    #[test]
    fn removes_adjacent_quotes_without_plus() {
        let raw = "{\"description\": \"first part\"  \"second part\"}";
        assert_eq!(
            clean_model_response(raw),
            "{\"description\": \"first partsecond part\"}"
        );
    }

    #[test]
    fn leaves_clean_json_untouched() {
        let raw = r#"{"positive_indicators": [], "negative_indicators": []}"#;
        assert_eq!(clean_model_response(raw), raw);
    }
}
