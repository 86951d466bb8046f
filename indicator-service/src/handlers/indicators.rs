use crate::startup::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use service_core::error::AppError;

/// Extract reunification indicators from the narrative in `case_info`.
///
/// An unparseable body is treated the same as a body without `case_info`.
pub async fn extract_indicators(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Response, AppError> {
    let case_info = payload.ok().and_then(|Json(body)| {
        body.get("case_info")
            .and_then(|v| v.as_str())
            .map(str::to_owned)
    });

    let Some(case_info) = case_info else {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Missing case_info in request"
        )));
    };

    match state.extractor.extract(&case_info).await? {
        Some(result) => Ok(Json(result).into_response()),
        None => Ok((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to extract indicators" })),
        )
            .into_response()),
    }
}

/// CORS preflight response.
pub async fn preflight() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
            (header::ACCESS_CONTROL_MAX_AGE, "3600"),
        ],
    )
}
