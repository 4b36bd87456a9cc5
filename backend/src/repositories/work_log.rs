//! Work log repository

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Work log record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WorkLogRecord {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub time_spent_hours: f64,
    pub kind: String,
    pub task_ticket: Option<String>,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a work log entry
#[derive(Debug, Clone)]
pub struct NewWorkLog {
    pub user_id: Option<Uuid>,
    pub time_spent_hours: f64,
    pub kind: String,
    pub task_ticket: Option<String>,
    pub comment: Option<String>,
}

/// Work log repository
pub struct WorkLogRepository;

impl WorkLogRepository {
    /// List entries, newest first, optionally filtered to one user
    pub async fn list(
        pool: &PgPool,
        user_id: Option<Uuid>,
        limit: i64,
    ) -> Result<Vec<WorkLogRecord>> {
        let logs = sqlx::query_as::<_, WorkLogRecord>(
            r#"
            SELECT id, user_id, time_spent_hours, kind, task_ticket, comment, created_at
            FROM work_logs
            WHERE ($1::uuid IS NULL OR user_id = $1)
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(logs)
    }

    /// Insert a work log entry
    pub async fn create(pool: &PgPool, new_log: NewWorkLog) -> Result<WorkLogRecord> {
        let log = sqlx::query_as::<_, WorkLogRecord>(
            r#"
            INSERT INTO work_logs (user_id, time_spent_hours, kind, task_ticket, comment)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, time_spent_hours, kind, task_ticket, comment, created_at
            "#,
        )
        .bind(new_log.user_id)
        .bind(new_log.time_spent_hours)
        .bind(new_log.kind)
        .bind(new_log.task_ticket)
        .bind(new_log.comment)
        .fetch_one(pool)
        .await?;

        Ok(log)
    }

    /// Delete an entry; false when the id did not resolve
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM work_logs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
