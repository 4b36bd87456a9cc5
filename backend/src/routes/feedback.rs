//! Feedback routes
//!
//! Reading and writing student feedback is restricted to mentors and the
//! placement cell.

use crate::auth::{authenticate, require_roles};
use crate::error::{ApiError, ApiResult};
use crate::repositories::{FeedbackRecord, FeedbackRepository, NewFeedback};
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    routing::get,
    Json, Router,
};
use placement_tracker_shared::models::{FeedbackTopic, Role};
use placement_tracker_shared::types::{CreateFeedbackRequest, FeedbackResponse};
use placement_tracker_shared::validation;
use std::str::FromStr;

const REVIEW_ROLES: &[Role] = &[Role::Mentor, Role::PlacementCell];

const DEFAULT_REVIEWER: &str = "Placement Officer";

/// Create feedback routes
pub fn feedback_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_feedback).post(create_feedback))
        .route_layer(middleware::from_fn(|req: Request, next: Next| {
            require_roles(REVIEW_ROLES, req, next)
        }))
        .route_layer(middleware::from_fn_with_state(state, authenticate))
}

/// GET /api/v1/feedback - Most recent feedback (Mentor, PlacementCell)
async fn list_feedback(State(state): State<AppState>) -> ApiResult<Json<Vec<FeedbackResponse>>> {
    let records = FeedbackRepository::list_recent(state.db(), 100)
        .await
        .map_err(ApiError::Internal)?;

    Ok(Json(records.into_iter().map(to_feedback_response).collect()))
}

/// POST /api/v1/feedback - Record feedback (Mentor, PlacementCell)
async fn create_feedback(
    State(state): State<AppState>,
    Json(req): Json<CreateFeedbackRequest>,
) -> ApiResult<(StatusCode, Json<FeedbackResponse>)> {
    let student_id = req
        .student_id
        .ok_or_else(|| ApiError::Validation("student_id is required".to_string()))?;
    if req.student_name.trim().is_empty()
        || req.company.trim().is_empty()
        || req.comments.trim().is_empty()
    {
        return Err(ApiError::Validation("Missing required fields".to_string()));
    }
    validation::validate_rating(req.rating).map_err(ApiError::Validation)?;
    let topic = FeedbackTopic::from_str(&req.topic).map_err(ApiError::Validation)?;

    let new_feedback = NewFeedback {
        student_id,
        student_name: req.student_name.trim().to_string(),
        topic: topic.as_str().to_string(),
        company: req.company.trim().to_string(),
        rating: req.rating,
        comments: req.comments,
        reviewer: req
            .reviewer
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REVIEWER.to_string()),
    };

    let record = FeedbackRepository::create(state.db(), new_feedback)
        .await
        .map_err(ApiError::Internal)?;

    Ok((StatusCode::CREATED, Json(to_feedback_response(record))))
}

fn to_feedback_response(record: FeedbackRecord) -> FeedbackResponse {
    FeedbackResponse {
        id: record.id.to_string(),
        student_id: record.student_id.to_string(),
        student_name: record.student_name,
        topic: record.topic,
        company: record.company,
        rating: record.rating,
        comments: record.comments,
        reviewer: record.reviewer,
        feedback_date: record.feedback_date,
    }
}
