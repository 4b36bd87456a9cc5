//! Job posting repository

use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Job posting record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct JobRecord {
    pub id: Uuid,
    pub posted_by: Uuid,
    pub title: String,
    pub company: String,
    pub description: String,
    pub min_cgpa: Decimal,
    pub required_skills: Vec<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a job posting
#[derive(Debug, Clone)]
pub struct NewJob {
    pub posted_by: Uuid,
    pub title: String,
    pub company: String,
    pub description: String,
    pub min_cgpa: Decimal,
    pub required_skills: Vec<String>,
}

const JOB_COLUMNS: &str =
    "id, posted_by, title, company, description, min_cgpa, required_skills, status, created_at, updated_at";

/// Job posting repository
pub struct JobRepository;

impl JobRepository {
    /// Insert a new job posting (status starts as Open)
    pub async fn create(pool: &PgPool, new_job: NewJob) -> Result<JobRecord> {
        let job = sqlx::query_as::<_, JobRecord>(&format!(
            r#"
            INSERT INTO job_postings (posted_by, title, company, description, min_cgpa, required_skills)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {JOB_COLUMNS}
            "#,
        ))
        .bind(new_job.posted_by)
        .bind(new_job.title)
        .bind(new_job.company)
        .bind(new_job.description)
        .bind(new_job.min_cgpa)
        .bind(new_job.required_skills)
        .fetch_one(pool)
        .await?;

        Ok(job)
    }

    /// List open postings, newest first
    ///
    /// `min_cgpa` keeps only postings a student with that CGPA can apply
    /// to; `skill` keeps postings that require it.
    pub async fn list_open(
        pool: &PgPool,
        min_cgpa: Option<Decimal>,
        skill: Option<String>,
    ) -> Result<Vec<JobRecord>> {
        let jobs = sqlx::query_as::<_, JobRecord>(&format!(
            r#"
            SELECT {JOB_COLUMNS}
            FROM job_postings
            WHERE status = 'Open'
              AND ($1::numeric IS NULL OR min_cgpa <= $1)
              AND ($2::text IS NULL OR $2 = ANY(required_skills))
            ORDER BY created_at DESC
            "#,
        ))
        .bind(min_cgpa)
        .bind(skill)
        .fetch_all(pool)
        .await?;

        Ok(jobs)
    }

    /// Find a posting by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<JobRecord>> {
        let job = sqlx::query_as::<_, JobRecord>(&format!(
            r#"
            SELECT {JOB_COLUMNS}
            FROM job_postings
            WHERE id = $1
            "#,
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(job)
    }

    /// Set a posting's status; `None` when the id does not resolve
    pub async fn update_status(
        pool: &PgPool,
        id: Uuid,
        status: &str,
    ) -> Result<Option<JobRecord>> {
        let job = sqlx::query_as::<_, JobRecord>(&format!(
            r#"
            UPDATE job_postings
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING {JOB_COLUMNS}
            "#,
        ))
        .bind(id)
        .bind(status)
        .fetch_optional(pool)
        .await?;

        Ok(job)
    }
}
