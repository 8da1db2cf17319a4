//! Per-user credit aggregation
//!
//! Regular assignments are walked first: solved cells give base credit and
//! entries give the required problem set. Upsolve assignments are walked
//! second and pay a bonus for each solve missing from the matched original
//! and from every regular assignment.

use std::collections::HashSet;

use tracing::{debug, warn};

use super::RankingError;
use super::index::{SolvedFactIndex, StandingsIndex};
use super::matcher::find_original;
use super::names::{is_valid_problem_name, normalize_problem_name};
use crate::constants::{BASE_CREDIT, UPSOLVE_BONUS};
use crate::models::{
    Assignment, AssignmentBacklog, AssignmentKind, UpsolvedProblem, UserRanking,
};

/// Everything one user's aggregation reads
pub struct RankingInputs<'a> {
    pub regular: &'a [&'a Assignment],
    pub upsolve: &'a [&'a Assignment],
    pub standings: &'a StandingsIndex<'a>,
    pub facts: &'a SolvedFactIndex<'a>,
}

#[derive(Debug, Clone)]
struct RequiredProblem {
    key: String,
    display: String,
}

/// Valid entries of an assignment, deduplicated by identity key
fn required_problems(assignment: &Assignment) -> Vec<RequiredProblem> {
    let mut seen = HashSet::new();

    assignment
        .entries
        .iter()
        .filter(|entry| is_valid_problem_name(&entry.name))
        .filter_map(|entry| {
            let display = entry.name.trim().to_string();
            let key = display.to_lowercase();
            seen.insert(key.clone()).then_some(RequiredProblem { key, display })
        })
        .collect()
}

#[derive(Debug, Default)]
struct UpsolveOutcome {
    solved: Vec<String>,
    credited: Vec<UpsolvedProblem>,
}

/// Solves and bonus-eligible problems of one upsolve assignment
///
/// Nothing is returned on error, so a bad slice leaves the user's
/// accumulators untouched.
fn credit_upsolve(
    user: &str,
    upsolve: &Assignment,
    inputs: &RankingInputs<'_>,
    base_solved: &HashSet<String>,
) -> Result<UpsolveOutcome, RankingError> {
    let facts = inputs.facts.facts(user, upsolve.id, AssignmentKind::Upsolve);
    let mut outcome = UpsolveOutcome::default();

    let mut keyed = Vec::with_capacity(facts.len());
    for fact in facts {
        let key = normalize_problem_name(&fact.problem_name);
        if key.is_empty() {
            return Err(RankingError::BlankProblemName {
                user: user.to_string(),
                assignment: upsolve.name.clone(),
            });
        }
        keyed.push((key, fact));
    }
    outcome.solved = keyed.iter().map(|(key, _)| key.clone()).collect();

    let Some(original) = find_original(&upsolve.name, inputs.regular) else {
        debug!(
            user = %user,
            upsolve = %upsolve.name,
            "No original assignment matched; upsolve earns no bonus"
        );
        return Ok(outcome);
    };

    let original_solved: HashSet<String> = inputs
        .facts
        .facts(user, original.id, AssignmentKind::Regular)
        .iter()
        .map(|fact| normalize_problem_name(&fact.problem_name))
        .collect();

    if original_solved.is_empty() {
        debug!(
            user = %user,
            upsolve = %upsolve.name,
            original = %original.name,
            "User has no solves in original; every upsolve solve is eligible"
        );
    }

    for (key, fact) in keyed {
        if original_solved.contains(&key) || base_solved.contains(&key) {
            continue;
        }

        outcome.credited.push(UpsolvedProblem {
            assignment_name: upsolve.name.clone(),
            assignment_url: upsolve.url.clone(),
            problem_name: fact.problem_name.clone(),
        });
    }

    Ok(outcome)
}

/// Compute one user's standing; `rank` is left at 0 for the ranker
pub fn aggregate_user(user: &str, inputs: &RankingInputs<'_>) -> UserRanking {
    let mut base_problems_solved = 0u32;
    let mut solved: HashSet<String> = HashSet::new();
    let mut candidates: Vec<RequiredProblem> = Vec::new();
    let mut candidate_keys: HashSet<String> = HashSet::new();
    let mut per_assignment: Vec<(&Assignment, Vec<RequiredProblem>)> =
        Vec::with_capacity(inputs.regular.len());

    for assignment in inputs.regular {
        if let Some(row) = inputs.standings.get(assignment.id, user) {
            for name in row.solved_problem_names() {
                base_problems_solved += BASE_CREDIT;
                solved.insert(normalize_problem_name(name));
            }
        }

        let required = required_problems(assignment);
        for problem in &required {
            if candidate_keys.insert(problem.key.clone()) {
                candidates.push(problem.clone());
            }
        }
        per_assignment.push((*assignment, required));
    }

    let base_solved = solved.clone();
    let mut upsolve_bonus = 0.0f64;
    let mut upsolved_problems = Vec::new();

    for upsolve in inputs.upsolve {
        match credit_upsolve(user, upsolve, inputs, &base_solved) {
            Ok(outcome) => {
                solved.extend(outcome.solved);
                for problem in outcome.credited {
                    upsolve_bonus += UPSOLVE_BONUS;
                    upsolved_problems.push(problem);
                }
            }
            Err(err) => {
                warn!(user = %user, upsolve = %upsolve.name, error = %err, "Skipping upsolve assignment");
            }
        }
    }

    let problems_not_done: Vec<String> = candidates
        .iter()
        .filter(|problem| !solved.contains(&problem.key))
        .map(|problem| problem.display.clone())
        .collect();

    let problems_not_done_by_assignment = per_assignment
        .into_iter()
        .filter_map(|(assignment, required)| {
            let problems: Vec<String> = required
                .into_iter()
                .filter(|problem| !solved.contains(&problem.key))
                .map(|problem| problem.display)
                .collect();

            (!problems.is_empty()).then(|| AssignmentBacklog {
                assignment_id: assignment.id,
                assignment_name: assignment.name.clone(),
                assignment_url: assignment.url.clone(),
                problems,
            })
        })
        .collect();

    debug!(
        user = %user,
        base = base_problems_solved,
        bonus = upsolve_bonus,
        not_done = problems_not_done.len(),
        "Aggregated user"
    );

    UserRanking {
        name: user.to_string(),
        rank: 0,
        total_score: f64::from(base_problems_solved) + upsolve_bonus,
        base_problems_solved,
        upsolve_bonus,
        problems_not_done_count: problems_not_done.len(),
        problems_not_done,
        problems_not_done_by_assignment,
        upsolved_problems,
    }
}
