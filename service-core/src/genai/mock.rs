//! Mock provider implementation for testing.

use super::{GenerationParams, ProviderError, TextProvider};
use async_trait::async_trait;

/// Mock text provider for testing.
///
/// Returns a canned response regardless of the prompt, or fails every
/// call when built with [`MockTextProvider::disabled`].
pub struct MockTextProvider {
    response: Option<String>,
}

impl MockTextProvider {
    /// Provider that answers every request with `response`.
    pub fn with_response(response: impl Into<String>) -> Self {
        Self {
            response: Some(response.into()),
        }
    }

    /// Provider that fails every request.
    pub fn disabled() -> Self {
        Self { response: None }
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        _prompt: &str,
        _params: &GenerationParams,
    ) -> Result<String, ProviderError> {
        match &self.response {
            Some(text) => Ok(text.clone()),
            None => Err(ProviderError::NotConfigured(
                "Mock text provider not enabled".to_string(),
            )),
        }
    }
}
