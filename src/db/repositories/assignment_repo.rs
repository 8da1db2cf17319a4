//! Assignment repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{AssignmentEntry, AssignmentRecord, NewAssignmentEntry},
};

/// Repository for assignment and entry database operations
pub struct AssignmentRepository;

impl AssignmentRepository {
    /// List all assignments, oldest first
    pub async fn list(pool: &PgPool) -> AppResult<Vec<AssignmentRecord>> {
        let assignments = sqlx::query_as::<_, AssignmentRecord>(
            r#"
            SELECT id, name, url, status, last_polled_at, created_at, updated_at
            FROM assignments
            ORDER BY created_at ASC, name ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(assignments)
    }

    /// Find assignment by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<AssignmentRecord>> {
        let assignment = sqlx::query_as::<_, AssignmentRecord>(
            r#"
            SELECT id, name, url, status, last_polled_at, created_at, updated_at
            FROM assignments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(assignment)
    }

    /// Insert or update an assignment keyed by its URL and mark it polled
    pub async fn upsert(
        pool: &PgPool,
        name: &str,
        url: &str,
        status: &str,
    ) -> AppResult<AssignmentRecord> {
        let assignment = sqlx::query_as::<_, AssignmentRecord>(
            r#"
            INSERT INTO assignments (name, url, status, last_polled_at)
            VALUES ($1, $2, $3, NOW())
            ON CONFLICT (url) DO UPDATE
            SET
                name = EXCLUDED.name,
                status = EXCLUDED.status,
                last_polled_at = NOW(),
                updated_at = NOW()
            RETURNING id, name, url, status, last_polled_at, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(url)
        .bind(status)
        .fetch_one(pool)
        .await?;

        Ok(assignment)
    }

    /// All entries of all assignments, in scrape order
    pub async fn list_entries(pool: &PgPool) -> AppResult<Vec<AssignmentEntry>> {
        let entries = sqlx::query_as::<_, AssignmentEntry>(
            r#"
            SELECT id, assignment_id, name, url
            FROM assignment_entries
            ORDER BY assignment_id, position ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(entries)
    }

    /// Entries of one assignment, in scrape order
    pub async fn list_entries_for(pool: &PgPool, assignment_id: &Uuid) -> AppResult<Vec<AssignmentEntry>> {
        let entries = sqlx::query_as::<_, AssignmentEntry>(
            r#"
            SELECT id, assignment_id, name, url
            FROM assignment_entries
            WHERE assignment_id = $1
            ORDER BY position ASC
            "#,
        )
        .bind(assignment_id)
        .fetch_all(pool)
        .await?;

        Ok(entries)
    }

    /// Replace an assignment's entries in one transaction
    pub async fn replace_entries(
        pool: &PgPool,
        assignment_id: &Uuid,
        entries: &[NewAssignmentEntry],
    ) -> AppResult<usize> {
        let mut tx = pool.begin().await?;

        sqlx::query(r#"DELETE FROM assignment_entries WHERE assignment_id = $1"#)
            .bind(assignment_id)
            .execute(&mut *tx)
            .await?;

        for (position, entry) in entries.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO assignment_entries (assignment_id, name, url, position)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(assignment_id)
            .bind(&entry.name)
            .bind(&entry.url)
            .bind(i32::try_from(position).unwrap_or(i32::MAX))
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(entries.len())
    }

    /// Remove every assignment together with its entries, ranks and results
    pub async fn delete_all(pool: &PgPool) -> AppResult<()> {
        let mut tx = pool.begin().await?;

        sqlx::query(r#"DELETE FROM problem_results"#).execute(&mut *tx).await?;
        sqlx::query(r#"DELETE FROM ranks"#).execute(&mut *tx).await?;
        sqlx::query(r#"DELETE FROM assignment_entries"#).execute(&mut *tx).await?;
        sqlx::query(r#"DELETE FROM assignments"#).execute(&mut *tx).await?;

        tx.commit().await?;

        Ok(())
    }
}
