//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod assignments;
pub mod health;
pub mod rankings;

use axum::{Router, middleware};

use crate::{middleware::logging_middleware, state::AppState};

/// Create all API routes
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/rankings", rankings::routes())
        .nest("/assignments", assignments::routes(state))
}

/// Versioned API router with request logging, ready to serve
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes(state.clone()))
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}
