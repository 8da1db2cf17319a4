//! Storage seam used by the services
//!
//! `PgStore` is the production implementation; `MemoryStore` backs tests and
//! database-less local runs.

use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{
        Assignment, AssignmentKind, AssignmentRecord, NewAssignmentEntry, ProblemResult, RankRow,
        StandingsSnapshot, StandingsSummary,
    },
};

/// Read and write access to assignments, standings and solved facts
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CourseStore: Send + Sync {
    /// All assignments with their entries, oldest first
    async fn list_assignments(&self) -> AppResult<Vec<Assignment>>;

    async fn find_assignment(&self, id: Uuid) -> AppResult<Option<Assignment>>;

    async fn list_ranks(&self) -> AppResult<Vec<RankRow>>;

    async fn list_ranks_for_assignment(&self, id: Uuid) -> AppResult<Vec<RankRow>>;

    /// Bulk fetch of every fact belonging to any of `names`
    async fn list_problem_results(&self, names: &[String]) -> AppResult<Vec<ProblemResult>>;

    /// Insert or update by URL; bumps `last_polled_at`
    async fn upsert_assignment(&self, name: &str, url: &str, status: &str) -> AppResult<AssignmentRecord>;

    /// Swap an assignment's entries; an empty list leaves them untouched
    async fn replace_entries(&self, assignment_id: Uuid, entries: &[NewAssignmentEntry]) -> AppResult<usize>;

    /// Swap an assignment's standings and the facts derived from them
    async fn replace_standings(
        &self,
        assignment_id: Uuid,
        kind: AssignmentKind,
        snapshot: &StandingsSnapshot,
    ) -> AppResult<StandingsSummary>;

    async fn delete_all(&self) -> AppResult<()>;
}

/// Rank rows plus derived facts for a standings table
///
/// A user holds at most one row per assignment. Repeated names collapse onto
/// the first row's position with the last row's content.
pub(crate) fn build_standings(
    assignment_id: Uuid,
    kind: AssignmentKind,
    snapshot: &StandingsSnapshot,
) -> (Vec<RankRow>, Vec<ProblemResult>) {
    let mut rows: Vec<RankRow> = Vec::with_capacity(snapshot.rows.len());
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for row in &snapshot.rows {
        let rank_row = row.clone().into_rank_row(assignment_id, &snapshot.problem_names);
        match positions.get(row.name.as_str()) {
            Some(&index) => rows[index] = rank_row,
            None => {
                positions.insert(row.name.as_str(), rows.len());
                rows.push(rank_row);
            }
        }
    }

    let facts = rows
        .iter()
        .flat_map(|row| ProblemResult::derive_from_row(row, kind))
        .collect();

    (rows, facts)
}
