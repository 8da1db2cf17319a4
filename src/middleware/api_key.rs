//! Ingest API key middleware

use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::{constants::API_KEY_HEADER, error::AppError, state::AppState, utils::verify_hash};

/// Reject requests whose `x-api-key` does not hash to the configured digest
pub async fn api_key_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_string();

    let Some(presented) = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|h| h.to_str().ok())
    else {
        debug!(path = %path, "Ingest rejected: no API key header");
        return Err(AppError::Unauthorized);
    };

    if !verify_hash(presented, &state.config().ingest.api_key_hash) {
        debug!(path = %path, "Ingest rejected: API key mismatch");
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(request).await)
}
