use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use npo2xml_core::error::CoreError;
use npo2xml_guide::GuideApiError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `npo2xml_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The guide API could not be reached or returned something unusable.
    #[error(transparent)]
    Guide(#[from] GuideApiError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Guide(err) if err.is_fetch() => (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_FETCH_FAILED",
                "The guide API could not be reached".to_string(),
            ),
            AppError::Guide(_) => (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_PARSE_FAILED",
                "The guide API returned an unreadable response".to_string(),
            ),
            AppError::Core(core) => {
                tracing::error!(error = %core, "Internal core error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
