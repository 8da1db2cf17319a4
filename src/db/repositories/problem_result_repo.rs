//! Solved-problem fact repository

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::{error::AppResult, models::ProblemResult};

/// Repository for problem result database operations
pub struct ProblemResultRepository;

impl ProblemResultRepository {
    /// Every fact recorded for any of the given users
    pub async fn list_for_users(pool: &PgPool, names: &[String]) -> AppResult<Vec<ProblemResult>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, ProblemResult>(
            r#"
            SELECT name, assignment_id, is_upsolve, problem_name, solved_time_minutes
            FROM problem_results
            WHERE name = ANY($1)
            "#,
        )
        .bind(names)
        .fetch_all(pool)
        .await?;

        Ok(results)
    }

    pub async fn delete_for_assignment(conn: &mut PgConnection, assignment_id: &Uuid) -> AppResult<u64> {
        let deleted = sqlx::query(r#"DELETE FROM problem_results WHERE assignment_id = $1"#)
            .bind(assignment_id)
            .execute(conn)
            .await?
            .rows_affected();

        Ok(deleted)
    }

    pub async fn insert_many(conn: &mut PgConnection, results: &[ProblemResult]) -> AppResult<()> {
        for result in results {
            sqlx::query(
                r#"
                INSERT INTO problem_results (
                    name, assignment_id, is_upsolve, problem_name, solved_time_minutes
                )
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(&result.name)
            .bind(result.assignment_id)
            .bind(result.is_upsolve)
            .bind(&result.problem_name)
            .bind(result.solved_time_minutes)
            .execute(&mut *conn)
            .await?;
        }

        Ok(())
    }
}
