//! Database module
//!
//! This module handles database connections, migrations, repositories and
//! the store and cache built on top of them.

pub mod cache;
pub mod connection;
pub mod memory;
pub mod pg_store;
pub mod repositories;
pub mod store;

use sqlx::PgPool;

pub use cache::{CachedRankings, RankingCache};
pub use connection::*;
pub use memory::MemoryStore;
pub use pg_store::PgStore;
pub use store::CourseStore;

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
