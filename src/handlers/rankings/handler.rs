//! Ranking handler implementations

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{error::AppResult, services::RankService, state::AppState};

use super::response::{RankingResponse, RankingsListResponse};

/// Full course ranking, best first
pub async fn list_rankings(State(state): State<AppState>) -> AppResult<Json<RankingsListResponse>> {
    let rankings = RankService::get_rankings(state.store(), state.cache()).await?;
    Ok(Json(rankings))
}

/// One user's ranking
pub async fn get_user_ranking(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<RankingResponse>> {
    let ranking = RankService::get_user_ranking(state.store(), state.cache(), &name).await?;
    Ok(Json(ranking))
}
