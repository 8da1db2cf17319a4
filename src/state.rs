//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::config::Config;
use crate::db::{CourseStore, RankingCache};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Assignment, standings and fact storage
    store: Arc<dyn CourseStore>,

    /// Ranking cache; absent when Redis is unavailable
    cache: Option<RankingCache>,

    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(store: Arc<dyn CourseStore>, cache: Option<RankingCache>, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store,
                cache,
                config,
            }),
        }
    }

    /// Get a reference to the course store
    pub fn store(&self) -> &dyn CourseStore {
        self.inner.store.as_ref()
    }

    /// Get the ranking cache, if one is configured
    pub fn cache(&self) -> Option<&RankingCache> {
        self.inner.cache.as_ref()
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
