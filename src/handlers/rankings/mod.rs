//! Global ranking handlers

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Ranking routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_rankings))
        .route("/{name}", get(handler::get_user_ranking))
}
