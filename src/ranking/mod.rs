//! Cross-assignment ranking
//!
//! Pure computation over an immutable snapshot of the store:
//! - **classifier**: regular vs upsolve assignments
//! - **matcher**: upsolve session → original assignment
//! - **aggregator**: one user's base credit, upsolve bonus and backlog
//! - **ranker**: ordering and tie-aware competition ranks
//!
//! Users are aggregated independently; nothing is shared between them but
//! read-only indexes.

pub mod aggregator;
pub mod classifier;
pub mod index;
pub mod matcher;
pub mod names;
pub mod ranker;

use tracing::info;

use crate::models::{Assignment, ProblemResult, RankRow, UserRanking};

pub use aggregator::{RankingInputs, aggregate_user};
pub use index::{SolvedFactIndex, StandingsIndex, roster};

/// Failure inside one user's upsolve slice; logged and skipped
#[derive(Debug, thiserror::Error)]
pub enum RankingError {
    #[error("upsolve result for {user} in \"{assignment}\" has a blank problem name")]
    BlankProblemName { user: String, assignment: String },
}

/// Everything one ranking run reads, fetched up front
#[derive(Debug, Clone, Default)]
pub struct RankingSnapshot {
    pub assignments: Vec<Assignment>,
    pub ranks: Vec<RankRow>,
    pub problem_results: Vec<ProblemResult>,
}

/// Rank every user appearing in the standings, best first
pub fn calculate_global_rankings(snapshot: &RankingSnapshot) -> Vec<UserRanking> {
    if snapshot.assignments.is_empty() {
        return Vec::new();
    }

    let split = classifier::partition(&snapshot.assignments);
    let standings = StandingsIndex::from_rows(&snapshot.ranks);
    let facts = SolvedFactIndex::from_results(&snapshot.problem_results);
    let users = roster(&snapshot.ranks);

    info!(
        assignments = snapshot.assignments.len(),
        regular = split.regular.len(),
        upsolve = split.upsolve.len(),
        users = users.len(),
        facts = facts.len(),
        "Calculating global rankings"
    );

    let inputs = RankingInputs {
        regular: &split.regular,
        upsolve: &split.upsolve,
        standings: &standings,
        facts: &facts,
    };

    let rankings = users
        .iter()
        .map(|user| aggregate_user(user, &inputs))
        .collect();

    ranker::assign_ranks(rankings)
}

#[cfg(test)]
pub(crate) mod testing {
    //! Fixture builders shared by the ranking tests

    use chrono::Utc;
    use uuid::Uuid;

    use crate::models::{
        Assignment, AssignmentEntry, AssignmentKind, AssignmentRecord, ProblemCell,
        ProblemResult, RankRow,
    };

    pub fn assignment(name: &str, entries: &[&str]) -> Assignment {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let entries = entries
            .iter()
            .map(|entry| AssignmentEntry {
                id: Uuid::new_v4(),
                assignment_id: id,
                name: entry.to_string(),
                url: format!("/problems/{}", entry.trim().to_lowercase()),
            })
            .collect();

        Assignment::from_record(
            AssignmentRecord {
                id,
                name: name.to_string(),
                url: format!("/assignments/{}", name),
                status: "ended".to_string(),
                last_polled_at: None,
                created_at: now,
                updated_at: now,
            },
            entries,
        )
    }

    pub fn row(assignment_id: Uuid, user: &str, cells: &[(&str, bool)]) -> RankRow {
        let names = cells.iter().map(|(name, _)| name.to_string()).collect();
        let problems = cells
            .iter()
            .map(|(_, solved)| ProblemCell {
                solved: *solved,
                attempts: i32::from(*solved),
                ..Default::default()
            })
            .collect();

        RankRow::new(assignment_id, user, names, problems)
    }

    pub fn fact(user: &str, assignment_id: Uuid, kind: AssignmentKind, problem: &str) -> ProblemResult {
        ProblemResult {
            name: user.to_string(),
            assignment_id,
            is_upsolve: kind.is_upsolve(),
            problem_name: problem.to_string(),
            solved_time_minutes: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{assignment, fact, row};
    use super::*;
    use crate::models::AssignmentKind;
    use std::collections::HashSet;

    fn course() -> RankingSnapshot {
        let hw1 = assignment("HW1", &["A", "B"]);
        let hw1_up = assignment("HW1 UPSOLVE", &["A", "B"]);
        let hw2 = assignment("HW2 - Graphs", &["Two Sum", "C"]);

        let mut ranks = vec![
            row(hw1.id, "alice", &[("A", true), ("B", false)]),
            row(hw1.id, "bob", &[("A", true), ("B", true)]),
            row(hw1.id, "Hidden User", &[("A", true), ("B", true)]),
            row(hw2.id, "alice", &[("Two Sum", true), ("C", false)]),
            row(hw2.id, "carol", &[("two sum", true), ("C", true)]),
            row(hw1_up.id, "alice", &[("A", true), ("B", true)]),
        ];
        ranks.push(row(hw1_up.id, "dave", &[("A", true)]));

        let mut problem_results: Vec<ProblemResult> = Vec::new();
        for r in &ranks {
            let kind = if r.assignment_id == hw1_up.id {
                AssignmentKind::Upsolve
            } else {
                AssignmentKind::Regular
            };
            problem_results.extend(ProblemResult::derive_from_row(r, kind));
        }

        RankingSnapshot {
            assignments: vec![hw1, hw1_up, hw2],
            ranks,
            problem_results,
        }
    }

    #[test]
    fn test_scenario_ranking() {
        let rankings = calculate_global_rankings(&course());
        let summary: Vec<_> = rankings
            .iter()
            .map(|r| (r.name.as_str(), r.rank, r.total_score))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("alice", 1, 2.5),
                ("bob", 2, 2.0),
                ("carol", 2, 2.0),
                ("dave", 4, 0.5),
            ]
        );
        assert!(rankings.iter().all(|r| r.name != "Hidden User"));
    }

    #[test]
    fn test_idempotent() {
        let snapshot = course();
        assert_eq!(
            calculate_global_rankings(&snapshot),
            calculate_global_rankings(&snapshot)
        );
    }

    #[test]
    fn test_score_and_credit_invariants() {
        let snapshot = course();
        for ranking in calculate_global_rankings(&snapshot) {
            assert_eq!(
                ranking.total_score,
                f64::from(ranking.base_problems_solved) + ranking.upsolve_bonus
            );
            assert!(ranking.upsolve_bonus >= 0.0);
            assert_eq!((ranking.upsolve_bonus * 2.0).fract(), 0.0);
            assert_eq!(ranking.problems_not_done_count, ranking.problems_not_done.len());

            let base_solved: HashSet<String> = snapshot
                .ranks
                .iter()
                .filter(|r| r.name == ranking.name)
                .filter(|r| {
                    snapshot
                        .assignments
                        .iter()
                        .any(|a| a.id == r.assignment_id && !a.kind.is_upsolve())
                })
                .flat_map(|r| r.solved_problem_names().map(names::normalize_problem_name))
                .collect();

            for upsolved in &ranking.upsolved_problems {
                assert!(!base_solved.contains(&names::normalize_problem_name(&upsolved.problem_name)));
            }
            for not_done in &ranking.problems_not_done {
                assert!(!base_solved.contains(&names::normalize_problem_name(not_done)));
            }
        }
    }

    #[test]
    fn test_empty_inputs() {
        assert!(calculate_global_rankings(&RankingSnapshot::default()).is_empty());

        let snapshot = RankingSnapshot {
            assignments: vec![assignment("HW1", &["A"])],
            ..Default::default()
        };
        assert!(calculate_global_rankings(&snapshot).is_empty());
    }

    #[test]
    fn test_without_upsolves_bonuses_are_zero() {
        let hw1 = assignment("HW1", &["A"]);
        let ranks = vec![row(hw1.id, "alice", &[("A", true)]), row(hw1.id, "bob", &[("A", false)])];
        let snapshot = RankingSnapshot {
            assignments: vec![hw1],
            ranks,
            problem_results: vec![fact("alice", uuid::Uuid::new_v4(), AssignmentKind::Upsolve, "A")],
        };

        let rankings = calculate_global_rankings(&snapshot);
        assert!(rankings.iter().all(|r| r.upsolve_bonus == 0.0));
        assert_eq!(rankings[0].name, "alice");
        assert_eq!(rankings[1].problems_not_done, vec!["A"]);
    }
}
