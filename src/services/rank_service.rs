//! Ranking service

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::{
    db::{CachedRankings, CourseStore, RankingCache},
    error::{AppError, AppResult},
    handlers::rankings::response::{RankingResponse, RankingsListResponse},
    ranking::{RankingSnapshot, calculate_global_rankings, roster},
    utils::now_utc,
};

/// Ranking service for business logic
pub struct RankService;

impl RankService {
    /// Read everything one ranking run needs
    ///
    /// Facts for the whole roster come from a single bulk query.
    pub async fn load_snapshot(store: &dyn CourseStore) -> AppResult<RankingSnapshot> {
        let (assignments, ranks) =
            futures::try_join!(store.list_assignments(), store.list_ranks())?;

        let users = roster(&ranks);
        let problem_results = store.list_problem_results(&users).await?;

        debug!(
            assignments = assignments.len(),
            ranks = ranks.len(),
            users = users.len(),
            facts = problem_results.len(),
            "Loaded ranking snapshot"
        );

        Ok(RankingSnapshot {
            assignments,
            ranks,
            problem_results,
        })
    }

    /// Compute fresh rankings off the async runtime
    pub async fn compute(store: &dyn CourseStore) -> AppResult<CachedRankings> {
        let snapshot = Self::load_snapshot(store).await?;
        let started = Instant::now();

        let rankings =
            tokio::task::spawn_blocking(move || calculate_global_rankings(&snapshot)).await?;

        info!(
            users = rankings.len(),
            elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "Computed global rankings"
        );

        Ok(CachedRankings {
            rankings,
            generated_at: now_utc(),
        })
    }

    /// Global rankings, served from the cache when possible
    pub async fn get_rankings(
        store: &dyn CourseStore,
        cache: Option<&RankingCache>,
    ) -> AppResult<RankingsListResponse> {
        let (computed, cached) = Self::read_through(store, cache).await?;
        Ok(RankingsListResponse::new(computed, cached))
    }

    /// One user's ranking; exact name first, then case-insensitive
    pub async fn get_user_ranking(
        store: &dyn CourseStore,
        cache: Option<&RankingCache>,
        name: &str,
    ) -> AppResult<RankingResponse> {
        let (mut computed, _) = Self::read_through(store, cache).await?;
        let wanted = name.to_lowercase();

        let position = computed
            .rankings
            .iter()
            .position(|r| r.name == name)
            .or_else(|| {
                computed
                    .rankings
                    .iter()
                    .position(|r| r.name.to_lowercase() == wanted)
            })
            .ok_or_else(|| AppError::NotFound(format!("No ranking for user '{}'", name)))?;

        Ok(RankingResponse::from(computed.rankings.swap_remove(position)))
    }

    /// Drop cached rankings after a write; failures are only logged
    pub async fn invalidate(cache: Option<&RankingCache>) {
        let Some(cache) = cache else {
            return;
        };

        if let Err(e) = cache.invalidate().await {
            warn!(error = %e, "Failed to invalidate ranking cache");
        }
    }

    async fn read_through(
        store: &dyn CourseStore,
        cache: Option<&RankingCache>,
    ) -> AppResult<(CachedRankings, bool)> {
        if let Some(cache) = cache {
            match cache.get().await {
                Ok(Some(hit)) => {
                    debug!(users = hit.rankings.len(), "Serving cached rankings");
                    return Ok((hit, true));
                }
                Ok(None) => debug!("Ranking cache miss"),
                Err(e) => warn!(error = %e, "Ranking cache read failed; recomputing"),
            }
        }

        let computed = Self::compute(store).await?;

        if let Some(cache) = cache {
            if let Err(e) = cache.put(&computed).await {
                warn!(error = %e, "Failed to store rankings in cache");
            }
        }

        Ok((computed, false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::store::MockCourseStore;
    use crate::db::{CourseStore, MemoryStore};
    use crate::models::{
        AssignmentKind, NewAssignmentEntry, NewStandingsRow, ProblemCell, StandingsSnapshot,
    };

    fn cell(solved: bool) -> ProblemCell {
        ProblemCell {
            solved,
            attempts: 1,
            ..Default::default()
        }
    }

    fn standings(problem_names: &[&str], rows: &[(&str, &[bool])]) -> StandingsSnapshot {
        StandingsSnapshot {
            problem_names: problem_names.iter().map(|n| n.to_string()).collect(),
            rows: rows
                .iter()
                .enumerate()
                .map(|(i, (name, solved))| NewStandingsRow {
                    name: name.to_string(),
                    rank: i as i32 + 1,
                    solved_count: solved.iter().filter(|s| **s).count() as i32,
                    total_time_minutes: 0,
                    problems: solved.iter().map(|s| cell(*s)).collect(),
                })
                .collect(),
        }
    }

    async fn seed(store: &MemoryStore, name: &str, problems: &[&str]) -> uuid::Uuid {
        let record = store
            .upsert_assignment(name, &format!("/assignments/{}", name), "ended")
            .await
            .unwrap();
        let entries: Vec<_> = problems
            .iter()
            .map(|p| NewAssignmentEntry {
                name: p.to_string(),
                url: String::new(),
            })
            .collect();
        store.replace_entries(record.id, &entries).await.unwrap();
        record.id
    }

    #[tokio::test]
    async fn test_rankings_from_memory_store() {
        let store = MemoryStore::new();
        let hw1 = seed(&store, "HW1", &["A", "B"]).await;
        let hw1_up = seed(&store, "HW1 UPSOLVE", &["A", "B"]).await;

        store
            .replace_standings(
                hw1,
                AssignmentKind::Regular,
                &standings(&["A", "B"], &[("alice", &[true, false]), ("bob", &[true, true])]),
            )
            .await
            .unwrap();
        store
            .replace_standings(
                hw1_up,
                AssignmentKind::Upsolve,
                &standings(&["A", "B"], &[("alice", &[true, true])]),
            )
            .await
            .unwrap();

        let response = RankService::get_rankings(&store, None).await.unwrap();

        assert!(!response.cached);
        assert_eq!(response.total_users, 2);
        let bob = &response.rankings[0];
        assert_eq!((bob.ranking.name.as_str(), bob.ranking.rank), ("bob", 1));
        let alice = &response.rankings[1];
        assert_eq!(alice.ranking.total_score, 1.5);
        assert_eq!(alice.total_score_display, "1.5");
        assert_eq!(alice.ranking.rank, 2);
        assert!(alice.ranking.problems_not_done.is_empty());
    }

    #[tokio::test]
    async fn test_user_lookup() {
        let store = MemoryStore::new();
        let hw1 = seed(&store, "HW1", &["A"]).await;
        store
            .replace_standings(hw1, AssignmentKind::Regular, &standings(&["A"], &[("Alice", &[true])]))
            .await
            .unwrap();

        let found = RankService::get_user_ranking(&store, None, "alice").await.unwrap();
        assert_eq!(found.ranking.name, "Alice");

        let missing = RankService::get_user_ranking(&store, None, "nobody").await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_facts_are_fetched_once_for_the_whole_roster() {
        let mut store = MockCourseStore::new();
        store.expect_list_assignments().times(1).returning(|| Ok(Vec::new()));
        store.expect_list_ranks().times(1).returning(|| {
            let id = uuid::Uuid::new_v4();
            Ok(vec![
                crate::models::RankRow::new(id, "zoe", vec![], vec![]),
                crate::models::RankRow::new(id, "adam", vec![], vec![]),
                crate::models::RankRow::new(id, "Hidden User", vec![], vec![]),
            ])
        });
        store
            .expect_list_problem_results()
            .withf(|names| names.to_vec() == vec!["adam".to_string(), "zoe".to_string()])
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let snapshot = RankService::load_snapshot(&store).await.unwrap();

        assert_eq!(snapshot.ranks.len(), 3);
        assert!(calculate_global_rankings(&snapshot).is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let mut store = MockCourseStore::new();
        store
            .expect_list_assignments()
            .returning(|| Err(AppError::Database("connection reset".into())));
        store.expect_list_ranks().returning(|| Ok(Vec::new()));
        store.expect_list_problem_results().never();

        let result = RankService::get_rankings(&store, None).await;
        assert!(matches!(result, Err(AppError::Database(_))));
    }
}
