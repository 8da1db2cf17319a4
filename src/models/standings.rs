//! Standings (rank row) model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Json};
use uuid::Uuid;

/// One cell of a standings row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemCell {
    pub solved: bool,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub attempted: bool,
    #[serde(default)]
    pub attempts: i32,
    /// Solve time as shown on the leaderboard; absent for unsolved cells
    #[serde(default)]
    pub time: Option<String>,
}

/// A user's standings row in one assignment
///
/// `problems[i]` describes `problem_names[i]`.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct RankRow {
    pub id: Uuid,
    pub assignment_id: Uuid,
    pub name: String,
    pub rank: i32,
    pub solved_count: i32,
    pub total_time_minutes: i32,
    pub problem_names: Vec<String>,
    pub problems: Json<Vec<ProblemCell>>,
    pub updated_at: DateTime<Utc>,
}

impl RankRow {
    /// Build an unsaved row; counters default to the row's own cells
    pub fn new(
        assignment_id: Uuid,
        name: impl Into<String>,
        problem_names: Vec<String>,
        problems: Vec<ProblemCell>,
    ) -> Self {
        let solved = problems.iter().filter(|cell| cell.solved).count();
        let solved_count = i32::try_from(solved).unwrap_or(i32::MAX);

        Self {
            id: Uuid::new_v4(),
            assignment_id,
            name: name.into(),
            rank: 0,
            solved_count,
            total_time_minutes: 0,
            problem_names,
            problems: Json(problems),
            updated_at: Utc::now(),
        }
    }

    /// Positionally paired (problem name, cell); unnamed positions are skipped
    pub fn cells(&self) -> impl Iterator<Item = (&str, &ProblemCell)> {
        self.problem_names
            .iter()
            .zip(self.problems.iter())
            .filter(|(name, _)| !name.is_empty())
            .map(|(name, cell)| (name.as_str(), cell))
    }

    /// Names of the problems this row marks as solved
    pub fn solved_problem_names(&self) -> impl Iterator<Item = &str> {
        self.cells()
            .filter(|(_, cell)| cell.solved)
            .map(|(name, _)| name)
    }
}

/// Standings row as received from the scraper
#[derive(Debug, Clone)]
pub struct NewStandingsRow {
    pub name: String,
    pub rank: i32,
    pub solved_count: i32,
    pub total_time_minutes: i32,
    pub problems: Vec<ProblemCell>,
}

impl NewStandingsRow {
    /// Attach the table's problem names and an id
    pub fn into_rank_row(self, assignment_id: Uuid, problem_names: &[String]) -> RankRow {
        RankRow {
            rank: self.rank,
            solved_count: self.solved_count,
            total_time_minutes: self.total_time_minutes,
            ..RankRow::new(assignment_id, self.name, problem_names.to_vec(), self.problems)
        }
    }
}

/// A full standings table for one assignment
#[derive(Debug, Clone)]
pub struct StandingsSnapshot {
    pub problem_names: Vec<String>,
    pub rows: Vec<NewStandingsRow>,
}

/// What a standings replacement wrote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StandingsSummary {
    pub rows: usize,
    pub facts: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(solved: bool) -> ProblemCell {
        ProblemCell {
            solved,
            ..Default::default()
        }
    }

    #[test]
    fn test_cells_pair_names_with_results() {
        let row = RankRow::new(
            Uuid::new_v4(),
            "alice",
            vec!["A".into(), "".into(), "C".into()],
            vec![cell(true), cell(true), cell(false), cell(true)],
        );

        let names: Vec<_> = row.cells().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["A", "C"]);

        let solved: Vec<_> = row.solved_problem_names().collect();
        assert_eq!(solved, vec!["A"]);
        assert_eq!(row.solved_count, 3);
    }

    #[test]
    fn test_problem_cell_defaults_when_fields_missing() {
        let cell: ProblemCell = serde_json::from_str(r#"{"solved": true}"#).unwrap();
        assert!(cell.solved);
        assert!(!cell.first);
        assert_eq!(cell.attempts, 0);
        assert_eq!(cell.time, None);
    }
}
