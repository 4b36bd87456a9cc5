//! Application routes
//!
//! Students apply to postings and list their own applications; the
//! placement cell reads aggregate status counts for the dashboard.

use crate::auth::{authenticate, require_roles, Principal};
use crate::error::{is_unique_violation, ApiError, ApiResult};
use crate::repositories::{ApplicationRepository, JobRepository};
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use placement_tracker_shared::models::{ApplicationStatus, JobStatus, Role};
use placement_tracker_shared::types::{
    ApplicationAnalytics, ApplicationSummary, CreateApplicationRequest,
};
use serde::Serialize;
use std::str::FromStr;

const APPLICANT_ROLES: &[Role] = &[Role::Student];
const ANALYTICS_ROLES: &[Role] = &[Role::PlacementCell];

/// Create application routes
pub fn application_routes(state: AppState) -> Router<AppState> {
    let apply = Router::new()
        .route("/", post(create_application))
        .route_layer(middleware::from_fn(|req: Request, next: Next| {
            require_roles(APPLICANT_ROLES, req, next)
        }));

    let analytics = Router::new()
        .route("/analytics", get(application_analytics))
        .route_layer(middleware::from_fn(|req: Request, next: Next| {
            require_roles(ANALYTICS_ROLES, req, next)
        }));

    Router::new()
        .route("/mine", get(my_applications))
        .merge(apply)
        .merge(analytics)
        .route_layer(middleware::from_fn_with_state(state, authenticate))
}

/// Newly created application
#[derive(Debug, Serialize)]
struct CreatedApplication {
    id: String,
    job_id: String,
    status: String,
    applied_at: DateTime<Utc>,
}

/// POST /api/v1/applications - Apply to an open posting (Student)
async fn create_application(
    State(state): State<AppState>,
    principal: Principal,
    Json(req): Json<CreateApplicationRequest>,
) -> ApiResult<(StatusCode, Json<CreatedApplication>)> {
    let job = JobRepository::find_by_id(state.db(), req.job_id)
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(|| ApiError::NotFound("Job not found".to_string()))?;

    if JobStatus::from_str(&job.status) != Ok(JobStatus::Open) {
        return Err(ApiError::Validation(
            "Job is not open for applications".to_string(),
        ));
    }

    let application = match ApplicationRepository::create(state.db(), principal.user_id, req.job_id)
        .await
    {
        Ok(application) => application,
        Err(e) if is_unique_violation(&e) => {
            return Err(ApiError::Conflict(
                "Already applied to this job".to_string(),
            ))
        }
        Err(e) => return Err(ApiError::Database(e)),
    };

    Ok((
        StatusCode::CREATED,
        Json(CreatedApplication {
            id: application.id.to_string(),
            job_id: application.job_id.to_string(),
            status: application.status,
            applied_at: application.applied_at,
        }),
    ))
}

/// GET /api/v1/applications/mine - The caller's own applications
async fn my_applications(
    State(state): State<AppState>,
    principal: Principal,
) -> ApiResult<Json<Vec<ApplicationSummary>>> {
    let applications = ApplicationRepository::list_for_student(state.db(), principal.user_id)
        .await
        .map_err(ApiError::Internal)?;

    let summaries = applications
        .into_iter()
        .map(|app| {
            let status = ApplicationStatus::from_str(&app.status).map_err(|e| {
                ApiError::Internal(anyhow::anyhow!("corrupt application status: {e}"))
            })?;
            Ok(ApplicationSummary {
                id: app.id.to_string(),
                job_title: app.job_title,
                company: app.company,
                status,
                applied_at: app.applied_at,
            })
        })
        .collect::<ApiResult<Vec<_>>>()?;

    Ok(Json(summaries))
}

/// GET /api/v1/applications/analytics - Aggregate counts (PlacementCell)
async fn application_analytics(
    State(state): State<AppState>,
) -> ApiResult<Json<ApplicationAnalytics>> {
    let by_status = ApplicationRepository::count_by_status(state.db())
        .await
        .map_err(ApiError::Internal)?;

    let total = by_status.values().sum();

    Ok(Json(ApplicationAnalytics { total, by_status }))
}
