//! Solved-problem fact model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{AssignmentKind, RankRow};
use crate::utils::time::parse_solve_time_minutes;

/// One solved problem for one user in one assignment
///
/// Only solved problems are stored. Rows are derived from standings at ingest.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct ProblemResult {
    pub name: String,
    pub assignment_id: Uuid,
    pub is_upsolve: bool,
    pub problem_name: String,
    pub solved_time_minutes: Option<i32>,
}

impl ProblemResult {
    pub fn kind(&self) -> AssignmentKind {
        AssignmentKind::from_upsolve_flag(self.is_upsolve)
    }

    /// Flatten the solved cells of a standings row into facts
    pub fn derive_from_row(row: &RankRow, kind: AssignmentKind) -> Vec<Self> {
        row.cells()
            .filter(|(_, cell)| cell.solved)
            .map(|(problem_name, cell)| Self {
                name: row.name.clone(),
                assignment_id: row.assignment_id,
                is_upsolve: kind.is_upsolve(),
                problem_name: problem_name.to_string(),
                solved_time_minutes: cell.time.as_deref().and_then(parse_solve_time_minutes),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProblemCell;

    #[test]
    fn test_derive_from_row_keeps_only_solved_cells() {
        let assignment_id = Uuid::new_v4();
        let row = RankRow::new(
            assignment_id,
            "bob",
            vec!["Two Sum".into(), "Graphs".into(), "Trees".into()],
            vec![
                ProblemCell {
                    solved: true,
                    attempts: 1,
                    time: Some("12 min".into()),
                    ..Default::default()
                },
                ProblemCell {
                    attempted: true,
                    attempts: 3,
                    ..Default::default()
                },
                ProblemCell {
                    solved: true,
                    first: true,
                    attempts: 2,
                    time: Some("1:05:10".into()),
                    ..Default::default()
                },
            ],
        );

        let facts = ProblemResult::derive_from_row(&row, AssignmentKind::Upsolve);

        assert_eq!(facts.len(), 2);
        assert!(facts.iter().all(|f| f.is_upsolve && f.name == "bob"));
        assert_eq!(facts[0].problem_name, "Two Sum");
        assert_eq!(facts[0].solved_time_minutes, Some(12));
        assert_eq!(facts[1].problem_name, "Trees");
        assert_eq!(facts[1].solved_time_minutes, Some(66));
        assert_eq!(facts[1].kind(), AssignmentKind::Upsolve);
    }
}
