//! Assignment listing and ingest handlers
//!
//! Reads are public. Writes come from the poller and require the ingest
//! API key.

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router, middleware,
    routing::{get, put},
};

use crate::{middleware::api_key_middleware, state::AppState};

/// Assignment routes
pub fn routes(state: AppState) -> Router<AppState> {
    let ingest = Router::new()
        .route(
            "/",
            put(handler::upsert_assignment).delete(handler::delete_all_assignments),
        )
        .route("/{id}/standings", put(handler::replace_standings))
        .route_layer(middleware::from_fn_with_state(state, api_key_middleware));

    Router::new()
        .route("/", get(handler::list_assignments))
        .route("/{id}/standings", get(handler::get_standings))
        .merge(ingest)
}
