//! Application repository

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

/// Application record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ApplicationRecord {
    pub id: Uuid,
    pub student_id: Uuid,
    pub job_id: Uuid,
    pub status: String,
    pub applied_at: DateTime<Utc>,
}

/// One row of a student's application list, joined with the posting
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ApplicationListRecord {
    pub id: Uuid,
    pub job_title: String,
    pub company: String,
    pub status: String,
    pub applied_at: DateTime<Utc>,
}

/// Application repository
pub struct ApplicationRepository;

impl ApplicationRepository {
    /// Insert an application
    ///
    /// One application per student per posting; the UNIQUE constraint
    /// surfaces a duplicate as a database unique violation, which the
    /// handler maps to a conflict.
    pub async fn create(
        pool: &PgPool,
        student_id: Uuid,
        job_id: Uuid,
    ) -> Result<ApplicationRecord, sqlx::Error> {
        let application = sqlx::query_as::<_, ApplicationRecord>(
            r#"
            INSERT INTO applications (student_id, job_id)
            VALUES ($1, $2)
            RETURNING id, student_id, job_id, status, applied_at
            "#,
        )
        .bind(student_id)
        .bind(job_id)
        .fetch_one(pool)
        .await?;

        Ok(application)
    }

    /// List a student's applications, newest first
    pub async fn list_for_student(
        pool: &PgPool,
        student_id: Uuid,
    ) -> Result<Vec<ApplicationListRecord>> {
        let applications = sqlx::query_as::<_, ApplicationListRecord>(
            r#"
            SELECT a.id, j.title AS job_title, j.company, a.status, a.applied_at
            FROM applications a
            JOIN job_postings j ON j.id = a.job_id
            WHERE a.student_id = $1
            ORDER BY a.applied_at DESC
            "#,
        )
        .bind(student_id)
        .fetch_all(pool)
        .await?;

        Ok(applications)
    }

    /// Count applications grouped by status
    pub async fn count_by_status(pool: &PgPool) -> Result<HashMap<String, i64>> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            r#"
            SELECT status, COUNT(*)
            FROM applications
            GROUP BY status
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().collect())
    }
}
