//! Assignment response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Assignment, AssignmentKind, RankRow};

/// Assignment with its entries
#[derive(Debug, Serialize)]
pub struct AssignmentResponse {
    pub id: Uuid,
    pub name: String,
    pub url: String,
    pub kind: AssignmentKind,
    pub status: String,
    pub last_polled_at: Option<DateTime<Utc>>,
    pub entries: Vec<EntryResponse>,
}

/// Assignment entry
#[derive(Debug, Serialize)]
pub struct EntryResponse {
    pub name: String,
    pub url: String,
}

impl From<Assignment> for AssignmentResponse {
    fn from(assignment: Assignment) -> Self {
        Self {
            id: assignment.id,
            name: assignment.name,
            url: assignment.url,
            kind: assignment.kind,
            status: assignment.status,
            last_polled_at: assignment.last_polled_at,
            entries: assignment
                .entries
                .into_iter()
                .map(|entry| EntryResponse {
                    name: entry.name,
                    url: entry.url,
                })
                .collect(),
        }
    }
}

/// Assignment summary for list views
#[derive(Debug, Serialize)]
pub struct AssignmentSummary {
    pub id: Uuid,
    pub name: String,
    pub url: String,
    pub kind: AssignmentKind,
    pub status: String,
    pub entry_count: usize,
    pub last_polled_at: Option<DateTime<Utc>>,
    /// Human-readable age of the last poll, e.g. "4m 10s"
    pub last_polled_ago: Option<String>,
    pub needs_refresh: bool,
}

/// Assignment list response
#[derive(Debug, Serialize)]
pub struct AssignmentsListResponse {
    pub assignments: Vec<AssignmentSummary>,
    pub total: usize,
}

/// One row of a stored standings table
#[derive(Debug, Serialize)]
pub struct StandingsRowResponse {
    pub name: String,
    pub rank: i32,
    pub solved_count: i32,
    pub total_time_minutes: i32,
    pub solved_problems: Vec<String>,
}

impl From<&RankRow> for StandingsRowResponse {
    fn from(row: &RankRow) -> Self {
        Self {
            name: row.name.clone(),
            rank: row.rank,
            solved_count: row.solved_count,
            total_time_minutes: row.total_time_minutes,
            solved_problems: row.solved_problem_names().map(str::to_string).collect(),
        }
    }
}

/// Stored standings of one assignment
#[derive(Debug, Serialize)]
pub struct StandingsResponse {
    pub assignment_id: Uuid,
    pub assignment_name: String,
    pub kind: AssignmentKind,
    pub rows: Vec<StandingsRowResponse>,
}

/// Result of a standings replacement
#[derive(Debug, Serialize)]
pub struct StandingsReplacedResponse {
    pub assignment_id: Uuid,
    pub kind: AssignmentKind,
    pub rows: usize,
    pub facts: usize,
}
