use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

pub const MISSING_PARAMETERS: &str = "Missing parameters. Use ?num=92...&key=...";
pub const BACKEND_CONNECTION_FAILED: &str = "Backend connection failed";

#[derive(Debug)]
pub enum AppError {
    MissingParameters,
    BackendConnection(String),
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::BackendConnection(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            AppError::MissingParameters => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "success": false, "error": MISSING_PARAMETERS })),
            )
                .into_response(),
            AppError::BackendConnection(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "error": BACKEND_CONNECTION_FAILED,
                    "detail": detail,
                })),
            )
                .into_response(),
        }
    }
}
