//! In-memory course store

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::store::{CourseStore, build_standings};
use crate::{
    constants::status,
    error::AppResult,
    models::{
        Assignment, AssignmentEntry, AssignmentKind, AssignmentRecord, NewAssignmentEntry,
        ProblemResult, RankRow, StandingsSnapshot, StandingsSummary,
    },
};

#[derive(Debug, Default)]
struct Tables {
    assignments: Vec<AssignmentRecord>,
    entries: HashMap<Uuid, Vec<AssignmentEntry>>,
    ranks: Vec<RankRow>,
    results: Vec<ProblemResult>,
}

/// Course store kept entirely in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tables {
    fn assignment(&self, record: &AssignmentRecord) -> Assignment {
        let entries = self.entries.get(&record.id).cloned().unwrap_or_default();
        Assignment::from_record(record.clone(), entries)
    }
}

#[async_trait]
impl CourseStore for MemoryStore {
    async fn list_assignments(&self) -> AppResult<Vec<Assignment>> {
        let tables = self.tables.read().await;
        Ok(tables.assignments.iter().map(|record| tables.assignment(record)).collect())
    }

    async fn find_assignment(&self, id: Uuid) -> AppResult<Option<Assignment>> {
        let tables = self.tables.read().await;
        Ok(tables
            .assignments
            .iter()
            .find(|record| record.id == id)
            .map(|record| tables.assignment(record)))
    }

    async fn list_ranks(&self) -> AppResult<Vec<RankRow>> {
        Ok(self.tables.read().await.ranks.clone())
    }

    async fn list_ranks_for_assignment(&self, id: Uuid) -> AppResult<Vec<RankRow>> {
        let tables = self.tables.read().await;
        let mut rows: Vec<RankRow> = tables
            .ranks
            .iter()
            .filter(|row| row.assignment_id == id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.rank.cmp(&b.rank).then_with(|| a.name.cmp(&b.name)));
        Ok(rows)
    }

    async fn list_problem_results(&self, names: &[String]) -> AppResult<Vec<ProblemResult>> {
        let wanted: HashSet<&str> = names.iter().map(String::as_str).collect();
        let tables = self.tables.read().await;
        Ok(tables
            .results
            .iter()
            .filter(|result| wanted.contains(result.name.as_str()))
            .cloned()
            .collect())
    }

    async fn upsert_assignment(&self, name: &str, url: &str, status: &str) -> AppResult<AssignmentRecord> {
        let mut tables = self.tables.write().await;
        let now = Utc::now();

        if let Some(record) = tables.assignments.iter_mut().find(|record| record.url == url) {
            record.name = name.to_string();
            record.status = status.to_string();
            record.last_polled_at = Some(now);
            record.updated_at = now;
            return Ok(record.clone());
        }

        let record = AssignmentRecord {
            id: Uuid::new_v4(),
            name: name.to_string(),
            url: url.to_string(),
            status: if status.is_empty() { status::ENDED } else { status }.to_string(),
            last_polled_at: Some(now),
            created_at: now,
            updated_at: now,
        };
        tables.assignments.push(record.clone());

        Ok(record)
    }

    async fn replace_entries(&self, assignment_id: Uuid, entries: &[NewAssignmentEntry]) -> AppResult<usize> {
        if entries.is_empty() {
            return Ok(0);
        }

        let entries = entries
            .iter()
            .map(|entry| AssignmentEntry {
                id: Uuid::new_v4(),
                assignment_id,
                name: entry.name.clone(),
                url: entry.url.clone(),
            })
            .collect::<Vec<_>>();
        let count = entries.len();

        self.tables.write().await.entries.insert(assignment_id, entries);

        Ok(count)
    }

    async fn replace_standings(
        &self,
        assignment_id: Uuid,
        kind: AssignmentKind,
        snapshot: &StandingsSnapshot,
    ) -> AppResult<StandingsSummary> {
        let (rows, facts) = build_standings(assignment_id, kind, snapshot);
        let summary = StandingsSummary {
            rows: rows.len(),
            facts: facts.len(),
        };

        let mut tables = self.tables.write().await;
        tables.ranks.retain(|row| row.assignment_id != assignment_id);
        tables.results.retain(|result| result.assignment_id != assignment_id);
        tables.ranks.extend(rows);
        tables.results.extend(facts);

        Ok(summary)
    }

    async fn delete_all(&self) -> AppResult<()> {
        *self.tables.write().await = Tables::default();
        Ok(())
    }
}
