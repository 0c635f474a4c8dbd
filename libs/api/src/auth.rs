use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http,
    middleware::Next,
    response::Response,
};

use crate::{ApiError, ApiState};

pub async fn auth(
    State(state): State<Arc<ApiState>>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok());

    let Some(auth_header) = auth_header else {
        return Err(ApiError::AuthError(
            "Authorization header is missing".to_string(),
        ));
    };

    if state.admin_api_key == auth_header {
        return Ok(next.run(req).await);
    }

    Err(ApiError::AuthError("Invalid API key".to_string()))
}
