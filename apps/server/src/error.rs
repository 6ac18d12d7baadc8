use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use quickfx_core::Error as CoreError;
use serde::Serialize;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Wrapper that renders core errors as the JSON error envelope.
pub struct ApiError(pub CoreError);

#[derive(Serialize)]
struct ErrorEnvelope {
    msg: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Exchange errors are client errors; anything else is an internal
        // fault that the contract does not enumerate.
        let status = match &self.0 {
            CoreError::Exchange(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(ErrorEnvelope {
            msg: "error",
            message: self.0.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        Self(err)
    }
}
