//! Standings (rank row) repository

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use super::ProblemResultRepository;
use crate::{
    error::AppResult,
    models::{ProblemResult, RankRow},
};

/// Repository for standings database operations
pub struct RankRepository;

impl RankRepository {
    /// List every standings row
    pub async fn list(pool: &PgPool) -> AppResult<Vec<RankRow>> {
        let rows = sqlx::query_as::<_, RankRow>(
            r#"
            SELECT id, assignment_id, name, rank, solved_count, total_time_minutes,
                   problem_names, problems, updated_at
            FROM ranks
            ORDER BY assignment_id, rank ASC, name ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// List the standings of one assignment
    pub async fn list_for_assignment(pool: &PgPool, assignment_id: &Uuid) -> AppResult<Vec<RankRow>> {
        let rows = sqlx::query_as::<_, RankRow>(
            r#"
            SELECT id, assignment_id, name, rank, solved_count, total_time_minutes,
                   problem_names, problems, updated_at
            FROM ranks
            WHERE assignment_id = $1
            ORDER BY rank ASC, name ASC
            "#,
        )
        .bind(assignment_id)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// Swap an assignment's standings and derived facts in one transaction
    pub async fn replace_for_assignment(
        pool: &PgPool,
        assignment_id: &Uuid,
        rows: &[RankRow],
        facts: &[ProblemResult],
    ) -> AppResult<()> {
        let mut tx = pool.begin().await?;

        ProblemResultRepository::delete_for_assignment(&mut tx, assignment_id).await?;
        sqlx::query(r#"DELETE FROM ranks WHERE assignment_id = $1"#)
            .bind(assignment_id)
            .execute(&mut *tx)
            .await?;

        for row in rows {
            Self::insert(&mut tx, row).await?;
        }
        ProblemResultRepository::insert_many(&mut tx, facts).await?;

        tx.commit().await?;

        Ok(())
    }

    async fn insert(conn: &mut PgConnection, row: &RankRow) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO ranks (
                id, assignment_id, name, rank, solved_count, total_time_minutes,
                problem_names, problems, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(row.id)
        .bind(row.assignment_id)
        .bind(&row.name)
        .bind(row.rank)
        .bind(row.solved_count)
        .bind(row.total_time_minutes)
        .bind(&row.problem_names)
        .bind(&row.problems)
        .bind(row.updated_at)
        .execute(conn)
        .await?;

        Ok(())
    }
}
