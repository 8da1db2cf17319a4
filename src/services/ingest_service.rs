//! Ingest service
//!
//! Landing point for parsed assignment pages and standings tables. Every
//! write drops the cached rankings.

use tracing::{debug, info};
use uuid::Uuid;

use super::RankService;
use crate::{
    config::PollingConfig,
    db::{CourseStore, RankingCache},
    error::{AppError, AppResult},
    handlers::assignments::{
        request::{ReplaceStandingsRequest, UpsertAssignmentRequest},
        response::{
            AssignmentResponse, AssignmentSummary, AssignmentsListResponse,
            StandingsReplacedResponse, StandingsResponse, StandingsRowResponse,
        },
    },
    models::{NewAssignmentEntry, NewStandingsRow, StandingsSnapshot},
    ranking::names::is_valid_problem_name,
    utils::{format_duration, needs_refresh, now_utc, validation::sanitize_string},
};

/// Ingest service for business logic
pub struct IngestService;

impl IngestService {
    /// Upsert an assignment by URL and replace its entries
    pub async fn upsert_assignment(
        store: &dyn CourseStore,
        cache: Option<&RankingCache>,
        payload: UpsertAssignmentRequest,
    ) -> AppResult<AssignmentResponse> {
        let name = sanitize_string(&payload.name);
        if name.is_empty() {
            return Err(AppError::Validation("Assignment name cannot be blank".to_string()));
        }

        let record = store
            .upsert_assignment(&name, payload.url.trim(), &payload.status)
            .await?;

        let received = payload.entries.len();
        let entries: Vec<NewAssignmentEntry> = payload
            .entries
            .into_iter()
            .filter(|entry| is_valid_problem_name(&entry.name))
            .map(|entry| NewAssignmentEntry {
                name: sanitize_string(&entry.name),
                url: entry.url.trim().to_string(),
            })
            .collect();

        if entries.len() < received {
            debug!(
                assignment = %record.name,
                dropped = received - entries.len(),
                "Dropped non-problem entries"
            );
        }

        let stored = store.replace_entries(record.id, &entries).await?;
        RankService::invalidate(cache).await;

        let assignment = store
            .find_assignment(record.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Assignment not found".to_string()))?;

        info!(
            assignment = %assignment.name,
            kind = %assignment.kind,
            entries = stored,
            "Upserted assignment"
        );

        Ok(AssignmentResponse::from(assignment))
    }

    /// Replace an assignment's standings and derived facts
    pub async fn replace_standings(
        store: &dyn CourseStore,
        cache: Option<&RankingCache>,
        assignment_id: Uuid,
        payload: ReplaceStandingsRequest,
    ) -> AppResult<StandingsReplacedResponse> {
        let assignment = store
            .find_assignment(assignment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Assignment not found".to_string()))?;

        let rows = payload
            .rows
            .into_iter()
            .filter_map(|row| {
                let name = sanitize_string(&row.name);
                if name.is_empty() {
                    return None;
                }

                let solved_count = row
                    .solved_count
                    .unwrap_or_else(|| {
                        let solved = row.problems.iter().filter(|cell| cell.solved).count();
                        i32::try_from(solved).unwrap_or(i32::MAX)
                    });

                Some(NewStandingsRow {
                    name,
                    rank: row.rank,
                    solved_count,
                    total_time_minutes: row.total_time_minutes,
                    problems: row.problems,
                })
            })
            .collect();

        let snapshot = StandingsSnapshot {
            problem_names: payload
                .problem_names
                .iter()
                .map(|name| sanitize_string(name))
                .collect(),
            rows,
        };

        let summary = store
            .replace_standings(assignment.id, assignment.kind, &snapshot)
            .await?;
        RankService::invalidate(cache).await;

        Ok(StandingsReplacedResponse {
            assignment_id: assignment.id,
            kind: assignment.kind,
            rows: summary.rows,
            facts: summary.facts,
        })
    }

    /// Assignments with entry counts and freshness
    pub async fn list_assignments(
        store: &dyn CourseStore,
        polling: &PollingConfig,
    ) -> AppResult<AssignmentsListResponse> {
        let now = now_utc();
        let interval = polling.interval();

        let assignments: Vec<AssignmentSummary> = store
            .list_assignments()
            .await?
            .into_iter()
            .map(|assignment| AssignmentSummary {
                needs_refresh: needs_refresh(assignment.last_polled_at, interval, now),
                last_polled_ago: assignment.last_polled_at.map(|at| format_duration(now - at)),
                entry_count: assignment.entries.len(),
                id: assignment.id,
                name: assignment.name,
                url: assignment.url,
                kind: assignment.kind,
                status: assignment.status,
                last_polled_at: assignment.last_polled_at,
            })
            .collect();

        Ok(AssignmentsListResponse {
            total: assignments.len(),
            assignments,
        })
    }

    /// Stored standings of one assignment
    pub async fn get_standings(store: &dyn CourseStore, assignment_id: Uuid) -> AppResult<StandingsResponse> {
        let assignment = store
            .find_assignment(assignment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Assignment not found".to_string()))?;

        let rows = store.list_ranks_for_assignment(assignment_id).await?;

        Ok(StandingsResponse {
            assignment_id: assignment.id,
            assignment_name: assignment.name,
            kind: assignment.kind,
            rows: rows.iter().map(StandingsRowResponse::from).collect(),
        })
    }

    /// Remove all stored course data
    pub async fn delete_all(store: &dyn CourseStore, cache: Option<&RankingCache>) -> AppResult<()> {
        store.delete_all().await?;
        RankService::invalidate(cache).await;

        info!("Deleted all assignments, standings and results");
        Ok(())
    }
}
