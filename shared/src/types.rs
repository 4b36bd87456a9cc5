//! API request and response types

use crate::models::{ApplicationStatus, Role};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Registration request
///
/// Required fields deserialize to empty strings when absent so the handler
/// can report a 400 with a field-level message instead of a body-rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    /// Display name; defaults to the username when omitted.
    #[serde(default)]
    pub name: Option<String>,
    /// Parsed leniently; anything unrecognized registers as a student.
    #[serde(default)]
    pub role: Option<String>,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Token plus safe user projection returned by register and login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserResponse,
}

/// Safe projection of a user record
///
/// This type is the only shape a user ever takes on the wire; the password
/// hash has no field to land in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Profile self-service update; every field is optional
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMeRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<Vec<String>>,
    /// New plaintext password. Re-hashing happens only when this is present.
    pub password: Option<String>,
}

/// Job creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJobRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub min_cgpa: f64,
    #[serde(default)]
    pub required_skills: Vec<String>,
}

/// Job status transition request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateJobStatusRequest {
    #[serde(default)]
    pub status: String,
}

/// Job posting as returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobResponse {
    pub id: String,
    pub posted_by: String,
    pub title: String,
    pub company: String,
    pub description: String,
    pub min_cgpa: f64,
    pub required_skills: Vec<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Application creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateApplicationRequest {
    pub job_id: Uuid,
}

/// One row of a student's own application list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationSummary {
    pub id: String,
    pub job_title: String,
    pub company: String,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}

/// Aggregate application counts for the placement dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationAnalytics {
    pub total: i64,
    pub by_status: HashMap<String, i64>,
}

/// Feedback creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFeedbackRequest {
    pub student_id: Option<Uuid>,
    #[serde(default)]
    pub student_name: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub rating: i32,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub reviewer: Option<String>,
}

/// Feedback record as returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub id: String,
    pub student_id: String,
    pub student_name: String,
    pub topic: String,
    pub company: String,
    pub rating: i32,
    pub comments: String,
    pub reviewer: String,
    pub feedback_date: DateTime<Utc>,
}

/// Work log creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateWorkLogRequest {
    #[serde(default)]
    pub time_spent_hours: f64,
    #[serde(default)]
    pub kind: String,
    pub task_ticket: Option<String>,
    pub comment: Option<String>,
}

/// Work log entry as returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkLogResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub time_spent_hours: f64,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_ticket: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_missing_fields_deserialize_empty() {
        let req: RegisterRequest = serde_json::from_str("{}").unwrap();
        assert!(req.username.is_empty());
        assert!(req.email.is_empty());
        assert!(req.password.is_empty());
        assert!(req.role.is_none());
    }

    #[test]
    fn test_user_response_has_no_password_field() {
        let user = UserResponse {
            id: "u1".to_string(),
            name: "Test".to_string(),
            username: "test".to_string(),
            email: "test@example.com".to_string(),
            role: Role::Student,
            phone: None,
            bio: None,
            skills: vec![],
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("password"));
    }
}
