//! Postgres-backed course store

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, info};
use uuid::Uuid;

use super::repositories::{AssignmentRepository, ProblemResultRepository, RankRepository};
use super::store::{CourseStore, build_standings};
use crate::{
    error::AppResult,
    models::{
        Assignment, AssignmentEntry, AssignmentKind, AssignmentRecord, NewAssignmentEntry,
        ProblemResult, RankRow, StandingsSnapshot, StandingsSummary,
    },
};

/// Course store over a Postgres pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseStore for PgStore {
    async fn list_assignments(&self) -> AppResult<Vec<Assignment>> {
        let (records, entries) = futures::try_join!(
            AssignmentRepository::list(&self.pool),
            AssignmentRepository::list_entries(&self.pool),
        )?;

        let mut by_assignment: HashMap<Uuid, Vec<AssignmentEntry>> = HashMap::new();
        for entry in entries {
            by_assignment.entry(entry.assignment_id).or_default().push(entry);
        }

        Ok(records
            .into_iter()
            .map(|record| {
                let entries = by_assignment.remove(&record.id).unwrap_or_default();
                Assignment::from_record(record, entries)
            })
            .collect())
    }

    async fn find_assignment(&self, id: Uuid) -> AppResult<Option<Assignment>> {
        let Some(record) = AssignmentRepository::find_by_id(&self.pool, &id).await? else {
            return Ok(None);
        };
        let entries = AssignmentRepository::list_entries_for(&self.pool, &id).await?;

        Ok(Some(Assignment::from_record(record, entries)))
    }

    async fn list_ranks(&self) -> AppResult<Vec<RankRow>> {
        RankRepository::list(&self.pool).await
    }

    async fn list_ranks_for_assignment(&self, id: Uuid) -> AppResult<Vec<RankRow>> {
        RankRepository::list_for_assignment(&self.pool, &id).await
    }

    async fn list_problem_results(&self, names: &[String]) -> AppResult<Vec<ProblemResult>> {
        ProblemResultRepository::list_for_users(&self.pool, names).await
    }

    async fn upsert_assignment(&self, name: &str, url: &str, status: &str) -> AppResult<AssignmentRecord> {
        AssignmentRepository::upsert(&self.pool, name, url, status).await
    }

    async fn replace_entries(&self, assignment_id: Uuid, entries: &[NewAssignmentEntry]) -> AppResult<usize> {
        if entries.is_empty() {
            debug!(assignment_id = %assignment_id, "No entries received; keeping existing ones");
            return Ok(0);
        }

        AssignmentRepository::replace_entries(&self.pool, &assignment_id, entries).await
    }

    async fn replace_standings(
        &self,
        assignment_id: Uuid,
        kind: AssignmentKind,
        snapshot: &StandingsSnapshot,
    ) -> AppResult<StandingsSummary> {
        let (rows, facts) = build_standings(assignment_id, kind, snapshot);

        RankRepository::replace_for_assignment(&self.pool, &assignment_id, &rows, &facts).await?;

        info!(
            assignment_id = %assignment_id,
            kind = %kind,
            rows = rows.len(),
            facts = facts.len(),
            "Replaced standings"
        );

        Ok(StandingsSummary {
            rows: rows.len(),
            facts: facts.len(),
        })
    }

    async fn delete_all(&self) -> AppResult<()> {
        AssignmentRepository::delete_all(&self.pool).await
    }
}
