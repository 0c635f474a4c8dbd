use std::sync::OnceLock;

use axum::{http::StatusCode, response::IntoResponse};
use catalog::CatalogResult;
use serde_json::{Map, Value};
use tracing::{error, warn};

use crate::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::AuthError(message) => {
                (StatusCode::UNAUTHORIZED, message).into_response()
            }
            ApiError::ClientError(message) => {
                (StatusCode::BAD_REQUEST, message).into_response()
            }
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::ServerError(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}

pub type ApiResponse<T> = Result<T, ApiError>;

pub trait IntoApiResponse<T> {
    fn into_response(self, error_code: &str) -> ApiResponse<T>;
}

fn error_message(error_code: &str) -> String {
    static ERRORS: OnceLock<Map<String, Value>> = OnceLock::new();
    let errors = ERRORS.get_or_init(|| {
        serde_json::from_str(include_str!("error-code.json"))
            .unwrap_or_default()
    });

    errors
        .get(error_code)
        .and_then(Value::as_str)
        .unwrap_or("unexpected error")
        .to_string()
}

impl<T> IntoApiResponse<T> for CatalogResult<T> {
    fn into_response(self, error_code: &str) -> ApiResponse<T> {
        self.map_err(|e| {
            let message = error_message(error_code);

            match error_code.as_bytes().first() {
                Some(&b'4') => {
                    warn!(error_code, err = %e);
                    ApiError::ClientError(format!("{}: {}", message, e))
                }
                _ => {
                    error!(error_code, err = %e);
                    ApiError::ServerError(message)
                }
            }
        })
    }
}
