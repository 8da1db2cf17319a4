//! Redis cache for computed rankings

use chrono::{DateTime, Utc};
use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use serde::{Deserialize, Serialize};

use crate::{constants::RANKINGS_CACHE_KEY, error::AppResult, models::UserRanking};

/// A ranking list as it was computed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedRankings {
    pub rankings: Vec<UserRanking>,
    pub generated_at: DateTime<Utc>,
}

/// Single-key ranking cache with a fixed TTL
#[derive(Clone)]
pub struct RankingCache {
    redis: ConnectionManager,
    ttl_seconds: u64,
}

impl RankingCache {
    pub fn new(redis: ConnectionManager, ttl_seconds: u64) -> Self {
        Self { redis, ttl_seconds }
    }

    pub async fn get(&self) -> AppResult<Option<CachedRankings>> {
        let mut redis = self.redis.clone();
        let payload: Option<String> = redis.get(RANKINGS_CACHE_KEY).await?;

        let Some(payload) = payload else {
            return Ok(None);
        };
        let cached = serde_json::from_str(&payload).map_err(anyhow::Error::from)?;

        Ok(Some(cached))
    }

    pub async fn put(&self, rankings: &CachedRankings) -> AppResult<()> {
        let payload = serde_json::to_string(rankings).map_err(anyhow::Error::from)?;
        let mut redis = self.redis.clone();
        redis
            .set_ex::<_, _, ()>(RANKINGS_CACHE_KEY, payload, self.ttl_seconds)
            .await?;

        Ok(())
    }

    pub async fn invalidate(&self) -> AppResult<()> {
        let mut redis = self.redis.clone();
        redis.del::<_, ()>(RANKINGS_CACHE_KEY).await?;

        Ok(())
    }
}
