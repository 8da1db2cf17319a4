//! Global ordering and competition ranks

use std::cmp::Ordering;

use crate::models::UserRanking;

/// Total score desc, base solves desc, name asc
pub fn compare(a: &UserRanking, b: &UserRanking) -> Ordering {
    b.total_score
        .total_cmp(&a.total_score)
        .then_with(|| b.base_problems_solved.cmp(&a.base_problems_solved))
        .then_with(|| a.name.cmp(&b.name))
}

/// Sort and assign ranks
///
/// Only `total_score` decides whether an entry shares its predecessor's rank;
/// a differing base count still shares. After a tie the next score resumes
/// at its 1-based position.
pub fn assign_ranks(mut rankings: Vec<UserRanking>) -> Vec<UserRanking> {
    rankings.sort_by(compare);

    let mut current = 1u32;
    let mut previous_score: Option<f64> = None;
    for (position, ranking) in rankings.iter_mut().enumerate() {
        if previous_score.is_some_and(|score| score != ranking.total_score) {
            current = u32::try_from(position + 1).unwrap_or(u32::MAX);
        }
        ranking.rank = current;
        previous_score = Some(ranking.total_score);
    }

    rankings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, base: u32, bonus: f64) -> UserRanking {
        UserRanking {
            name: name.to_string(),
            rank: 0,
            total_score: f64::from(base) + bonus,
            base_problems_solved: base,
            upsolve_bonus: bonus,
            problems_not_done: vec![],
            problems_not_done_count: 0,
            problems_not_done_by_assignment: vec![],
            upsolved_problems: vec![],
        }
    }

    fn ranks(rankings: &[UserRanking]) -> Vec<(&str, u32)> {
        rankings.iter().map(|r| (r.name.as_str(), r.rank)).collect()
    }

    #[test]
    fn test_tie_on_total_shares_rank_despite_base_difference() {
        let ranked = assign_ranks(vec![
            entry("carol", 1, 0.5),
            entry("bob", 1, 1.0),
            entry("alice", 2, 0.0),
        ]);

        assert_eq!(ranks(&ranked), vec![("alice", 1), ("bob", 1), ("carol", 3)]);
    }

    #[test]
    fn test_name_breaks_full_ties() {
        let ranked = assign_ranks(vec![
            entry("zed", 3, 0.0),
            entry("amy", 3, 0.0),
            entry("kim", 1, 0.0),
            entry("lee", 0, 0.5),
        ]);

        assert_eq!(
            ranks(&ranked),
            vec![("amy", 1), ("zed", 1), ("kim", 3), ("lee", 4)]
        );
    }

    #[test]
    fn test_empty_and_single() {
        assert!(assign_ranks(vec![]).is_empty());

        let ranked = assign_ranks(vec![entry("solo", 0, 0.0)]);
        assert_eq!(ranks(&ranked), vec![("solo", 1)]);
    }

    #[test]
    fn test_ranks_are_monotonic_and_advance_only_on_score_change() {
        let ranked = assign_ranks(vec![
            entry("a", 5, 0.0),
            entry("b", 4, 1.0),
            entry("c", 4, 0.5),
            entry("d", 2, 0.0),
            entry("e", 1, 1.0),
            entry("f", 0, 0.0),
        ]);

        for pair in ranked.windows(2) {
            assert!(pair[0].rank <= pair[1].rank);
            assert_eq!(pair[0].rank == pair[1].rank, pair[0].total_score == pair[1].total_score);
        }
    }
}
