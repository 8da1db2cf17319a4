//! Ranking response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{db::CachedRankings, models::UserRanking, utils::format_score};

/// One user's ranking with a display-ready score
#[derive(Debug, Serialize)]
pub struct RankingResponse {
    #[serde(flatten)]
    pub ranking: UserRanking,
    pub total_score_display: String,
}

impl From<UserRanking> for RankingResponse {
    fn from(ranking: UserRanking) -> Self {
        Self {
            total_score_display: format_score(ranking.total_score),
            ranking,
        }
    }
}

/// Ranking list response
#[derive(Debug, Serialize)]
pub struct RankingsListResponse {
    pub rankings: Vec<RankingResponse>,
    pub total_users: usize,
    pub generated_at: DateTime<Utc>,
    /// Whether the list was served from the ranking cache
    pub cached: bool,
}

impl RankingsListResponse {
    pub fn new(computed: CachedRankings, cached: bool) -> Self {
        Self {
            total_users: computed.rankings.len(),
            rankings: computed.rankings.into_iter().map(RankingResponse::from).collect(),
            generated_at: computed.generated_at,
            cached,
        }
    }
}
