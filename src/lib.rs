//! Upsolve Rank - cross-assignment course ranking
//!
//! Ranks every student of a course by the problems they solved across all
//! graded assignments, plus half credit for problems they only solved later
//! in an "upsolve" session.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic, cache read-through
//! - **Ranking**: Pure ranking computation over a store snapshot
//! - **Db**: Store trait, Postgres repositories, Redis cache
//! - **Models**: Domain models

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod ranking;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
