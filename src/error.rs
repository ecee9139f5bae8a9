use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::cargo_client::CargoError;

#[derive(Debug)]
pub enum ApiError {
    /// The wiki query failed; the frontend gets the stringified cause.
    Upstream(CargoError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::Upstream(err) => {
                tracing::error!("Upstream query failed: {}", err);
                (StatusCode::BAD_GATEWAY, err.to_string())
            }
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message: error_message,
        });

        (status, body).into_response()
    }
}

impl From<CargoError> for ApiError {
    fn from(err: CargoError) -> Self {
        ApiError::Upstream(err)
    }
}
