//! In-memory lookups over a ranking snapshot
//!
//! Both indexes borrow from the snapshot, so building them costs one pass
//! over the rows and no string copies.

use std::collections::{BTreeSet, HashMap};

use uuid::Uuid;

use crate::constants::HIDDEN_USER_NAME;
use crate::models::{AssignmentKind, ProblemResult, RankRow};

/// Whether a roster name is excluded from ranking
pub fn is_hidden_user(name: &str) -> bool {
    name.to_lowercase() == HIDDEN_USER_NAME
}

/// Distinct rankable user names across all standings rows, sorted
pub fn roster(rows: &[RankRow]) -> Vec<String> {
    rows.iter()
        .map(|row| row.name.as_str())
        .filter(|name| !is_hidden_user(name))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Standings rows keyed by assignment, then exact user name
#[derive(Debug, Default)]
pub struct StandingsIndex<'a> {
    rows: HashMap<Uuid, HashMap<&'a str, &'a RankRow>>,
}

impl<'a> StandingsIndex<'a> {
    pub fn from_rows(rows: &'a [RankRow]) -> Self {
        let mut index: HashMap<Uuid, HashMap<&'a str, &'a RankRow>> = HashMap::new();
        for row in rows {
            index
                .entry(row.assignment_id)
                .or_default()
                .insert(row.name.as_str(), row);
        }

        Self { rows: index }
    }

    pub fn get(&self, assignment_id: Uuid, user: &str) -> Option<&'a RankRow> {
        self.rows
            .get(&assignment_id)
            .and_then(|by_user| by_user.get(user))
            .copied()
    }
}

/// Solved-problem facts keyed by user, then `(assignment, kind)`
#[derive(Debug, Default)]
pub struct SolvedFactIndex<'a> {
    by_user: HashMap<&'a str, HashMap<(Uuid, AssignmentKind), Vec<&'a ProblemResult>>>,
}

impl<'a> SolvedFactIndex<'a> {
    pub fn from_results(results: &'a [ProblemResult]) -> Self {
        let mut by_user: HashMap<&'a str, HashMap<(Uuid, AssignmentKind), Vec<&'a ProblemResult>>> =
            HashMap::new();

        for result in results {
            by_user
                .entry(result.name.as_str())
                .or_default()
                .entry((result.assignment_id, result.kind()))
                .or_default()
                .push(result);
        }

        Self { by_user }
    }

    /// Facts for one user in one assignment; empty when none were recorded
    pub fn facts(&self, user: &str, assignment_id: Uuid, kind: AssignmentKind) -> &[&'a ProblemResult] {
        self.by_user
            .get(user)
            .and_then(|by_assignment| by_assignment.get(&(assignment_id, kind)))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.by_user.values().flat_map(HashMap::values).map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::testing::{fact, row};

    #[test]
    fn test_roster_is_sorted_distinct_and_skips_hidden_users() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let rows = vec![
            row(a, "zoe", &[]),
            row(a, "Hidden User", &[]),
            row(b, "adam", &[]),
            row(b, "zoe", &[]),
            row(b, "HIDDEN USER", &[]),
        ];

        assert_eq!(roster(&rows), vec!["adam".to_string(), "zoe".to_string()]);
    }

    #[test]
    fn test_standings_lookup_is_exact_on_user_name() {
        let a = Uuid::new_v4();
        let rows = vec![row(a, "Alice", &[("A", true)])];
        let index = StandingsIndex::from_rows(&rows);

        assert!(index.get(a, "Alice").is_some());
        assert!(index.get(a, "alice").is_none());
        assert!(index.get(Uuid::new_v4(), "Alice").is_none());
    }

    #[test]
    fn test_fact_lookup_separates_kinds() {
        let a = Uuid::new_v4();
        let results = vec![
            fact("alice", a, AssignmentKind::Regular, "A"),
            fact("alice", a, AssignmentKind::Upsolve, "B"),
            fact("alice", a, AssignmentKind::Upsolve, "C"),
            fact("bob", a, AssignmentKind::Regular, "A"),
        ];
        let index = SolvedFactIndex::from_results(&results);

        assert_eq!(index.len(), 4);
        assert_eq!(index.facts("alice", a, AssignmentKind::Regular).len(), 1);
        assert_eq!(index.facts("alice", a, AssignmentKind::Upsolve).len(), 2);
        assert!(index.facts("carol", a, AssignmentKind::Regular).is_empty());
    }
}
