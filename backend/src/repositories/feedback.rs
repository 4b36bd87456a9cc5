//! Feedback repository

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Feedback record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FeedbackRecord {
    pub id: Uuid,
    pub student_id: Uuid,
    pub student_name: String,
    pub topic: String,
    pub company: String,
    pub rating: i32,
    pub comments: String,
    pub reviewer: String,
    pub feedback_date: DateTime<Utc>,
}

/// Input for creating a feedback record
#[derive(Debug, Clone)]
pub struct NewFeedback {
    pub student_id: Uuid,
    pub student_name: String,
    pub topic: String,
    pub company: String,
    pub rating: i32,
    pub comments: String,
    pub reviewer: String,
}

/// Feedback repository
pub struct FeedbackRepository;

impl FeedbackRepository {
    /// List the most recent feedback records
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<FeedbackRecord>> {
        let records = sqlx::query_as::<_, FeedbackRecord>(
            r#"
            SELECT id, student_id, student_name, topic, company, rating, comments, reviewer, feedback_date
            FROM feedback
            ORDER BY feedback_date DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Insert a feedback record
    pub async fn create(pool: &PgPool, new_feedback: NewFeedback) -> Result<FeedbackRecord> {
        let record = sqlx::query_as::<_, FeedbackRecord>(
            r#"
            INSERT INTO feedback (student_id, student_name, topic, company, rating, comments, reviewer)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, student_id, student_name, topic, company, rating, comments, reviewer, feedback_date
            "#,
        )
        .bind(new_feedback.student_id)
        .bind(new_feedback.student_name)
        .bind(new_feedback.topic)
        .bind(new_feedback.company)
        .bind(new_feedback.rating)
        .bind(new_feedback.comments)
        .bind(new_feedback.reviewer)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }
}
