//! Upsolve Rank - Application Entry Point

use std::net::SocketAddr;
use std::sync::Arc;

use redis::Client as RedisClient;
use tokio::net::TcpListener;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use upsolve_rank::{
    config::CONFIG,
    db::{self, PgStore, RankingCache},
    handlers,
    state::AppState,
};

/// Connect to Redis; rankings are computed uncached when this fails
async fn connect_cache() -> Option<RankingCache> {
    let client = match RedisClient::open(CONFIG.redis.url.as_str()) {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!(error = %e, "Invalid Redis URL; ranking cache disabled");
            return None;
        }
    };

    match redis::aio::ConnectionManager::new(client).await {
        Ok(conn) => Some(RankingCache::new(conn, CONFIG.polling.interval_seconds)),
        Err(e) => {
            tracing::warn!(error = %e, "Redis unavailable; ranking cache disabled");
            None
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.server.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Upsolve Rank server...");

    // Initialize database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = db::create_pool(&CONFIG.database).await?;

    // Run database migrations
    tracing::info!("Running database migrations...");
    db::run_migrations(&db_pool).await?;

    // Initialize Redis ranking cache
    tracing::info!("Connecting to Redis...");
    let cache = connect_cache().await;

    let state = AppState::new(Arc::new(PgStore::new(db_pool)), cache, CONFIG.clone());

    // Build the router
    let app = handlers::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    // Start the server
    let addr = SocketAddr::new(CONFIG.server.host.parse()?, CONFIG.server.port);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
