//! Assignment handler implementations

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::{error::AppResult, services::IngestService, state::AppState};

use super::{
    request::{ReplaceStandingsRequest, UpsertAssignmentRequest},
    response::{
        AssignmentResponse, AssignmentsListResponse, StandingsReplacedResponse, StandingsResponse,
    },
};

/// List assignments with their freshness
pub async fn list_assignments(
    State(state): State<AppState>,
) -> AppResult<Json<AssignmentsListResponse>> {
    let assignments =
        IngestService::list_assignments(state.store(), &state.config().polling).await?;
    Ok(Json(assignments))
}

/// Stored standings of one assignment
pub async fn get_standings(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<StandingsResponse>> {
    let standings = IngestService::get_standings(state.store(), id).await?;
    Ok(Json(standings))
}

/// Create or update an assignment and its entries
pub async fn upsert_assignment(
    State(state): State<AppState>,
    Json(payload): Json<UpsertAssignmentRequest>,
) -> AppResult<Json<AssignmentResponse>> {
    payload.validate()?;

    let assignment = IngestService::upsert_assignment(state.store(), state.cache(), payload).await?;
    Ok(Json(assignment))
}

/// Replace the standings of an assignment
pub async fn replace_standings(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ReplaceStandingsRequest>,
) -> AppResult<Json<StandingsReplacedResponse>> {
    payload.validate()?;

    let replaced =
        IngestService::replace_standings(state.store(), state.cache(), id, payload).await?;
    Ok(Json(replaced))
}

/// Wipe every assignment, standings row and fact
pub async fn delete_all_assignments(State(state): State<AppState>) -> AppResult<StatusCode> {
    IngestService::delete_all(state.store(), state.cache()).await?;
    Ok(StatusCode::NO_CONTENT)
}
