//! HTTP middleware

pub mod api_key;
pub mod logging;

pub use api_key::api_key_middleware;
pub use logging::logging_middleware;
