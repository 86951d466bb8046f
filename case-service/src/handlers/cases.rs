use crate::prompts;
use crate::startup::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::json;
use service_core::error::AppError;

/// Generate a fictional case narrative.
///
/// The request body, if any, is ignored. The model's text is returned
/// verbatim with no trimming or validation.
pub async fn generate_case(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let case = state
        .text_provider
        .generate(prompts::NARRATIVE_PROMPT, &prompts::narrative_params())
        .await?;

    Ok(Json(json!({ "case": case })))
}

/// CORS preflight response.
pub async fn preflight() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, OPTIONS"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
            (header::ACCESS_CONTROL_MAX_AGE, "3600"),
        ],
    )
}
