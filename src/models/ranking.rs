//! Global ranking output model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A problem that earned upsolve credit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpsolvedProblem {
    pub assignment_name: String,
    pub assignment_url: String,
    pub problem_name: String,
}

/// Unsolved required problems of one regular assignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentBacklog {
    pub assignment_id: Uuid,
    pub assignment_name: String,
    pub assignment_url: String,
    pub problems: Vec<String>,
}

/// One user's cross-assignment standing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRanking {
    pub name: String,
    pub rank: u32,
    /// Always `base_problems_solved + upsolve_bonus`
    pub total_score: f64,
    pub base_problems_solved: u32,
    pub upsolve_bonus: f64,
    pub problems_not_done: Vec<String>,
    pub problems_not_done_count: usize,
    pub problems_not_done_by_assignment: Vec<AssignmentBacklog>,
    pub upsolved_problems: Vec<UpsolvedProblem>,
}
