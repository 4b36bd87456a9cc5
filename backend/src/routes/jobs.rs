//! Job posting routes
//!
//! Listing and reading are public; creating a posting and moving its
//! status are restricted to recruiters and the placement cell.

use crate::auth::{authenticate, require_roles, Principal};
use crate::error::{ApiError, ApiResult};
use crate::repositories::{JobRecord, JobRepository, NewJob};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    routing::{get, patch, post},
    Json, Router,
};
use placement_tracker_shared::models::{JobStatus, Role};
use placement_tracker_shared::types::{CreateJobRequest, JobResponse, UpdateJobStatusRequest};
use placement_tracker_shared::validation;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;
use uuid::Uuid;

const POSTING_ROLES: &[Role] = &[Role::Recruiter, Role::PlacementCell];

/// Create job routes
pub fn job_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_job))
        .route("/:id/status", patch(update_job_status))
        .route_layer(middleware::from_fn(|req: Request, next: Next| {
            require_roles(POSTING_ROLES, req, next)
        }))
        .route_layer(middleware::from_fn_with_state(state, authenticate));

    Router::new()
        .route("/", get(list_open_jobs))
        .route("/:id", get(get_job))
        .merge(protected)
}

/// Query filters for the open-jobs listing
#[derive(Debug, Deserialize)]
struct JobFilters {
    min_cgpa: Option<f64>,
    skill: Option<String>,
}

/// GET /api/v1/jobs - List open postings (public)
async fn list_open_jobs(
    State(state): State<AppState>,
    Query(filters): Query<JobFilters>,
) -> ApiResult<Json<Vec<JobResponse>>> {
    let min_cgpa = filters.min_cgpa.and_then(Decimal::from_f64);

    let jobs = JobRepository::list_open(state.db(), min_cgpa, filters.skill)
        .await
        .map_err(ApiError::Internal)?;

    Ok(Json(jobs.into_iter().map(to_job_response).collect()))
}

/// GET /api/v1/jobs/:id - Read one posting (public)
async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<JobResponse>> {
    let job = JobRepository::find_by_id(state.db(), id)
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(|| ApiError::NotFound("Job not found".to_string()))?;

    Ok(Json(to_job_response(job)))
}

/// POST /api/v1/jobs - Create a posting (Recruiter, PlacementCell)
async fn create_job(
    State(state): State<AppState>,
    principal: Principal,
    Json(req): Json<CreateJobRequest>,
) -> ApiResult<(StatusCode, Json<JobResponse>)> {
    if req.title.trim().is_empty() || req.company.trim().is_empty() || req.description.is_empty() {
        return Err(ApiError::Validation(
            "title, company, and description are required".to_string(),
        ));
    }
    validation::validate_cgpa(req.min_cgpa).map_err(ApiError::Validation)?;

    let new_job = NewJob {
        posted_by: principal.user_id,
        title: req.title.trim().to_string(),
        company: req.company.trim().to_string(),
        description: req.description,
        min_cgpa: Decimal::from_f64(req.min_cgpa).unwrap_or_default(),
        required_skills: req.required_skills,
    };

    let job = JobRepository::create(state.db(), new_job)
        .await
        .map_err(ApiError::Internal)?;

    Ok((StatusCode::CREATED, Json(to_job_response(job))))
}

/// PATCH /api/v1/jobs/:id/status - Open or close a posting (Recruiter, PlacementCell)
async fn update_job_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateJobStatusRequest>,
) -> ApiResult<Json<JobResponse>> {
    if req.status.is_empty() {
        return Err(ApiError::Validation("status is required".to_string()));
    }
    let status = JobStatus::from_str(&req.status)
        .map_err(|_| ApiError::Validation("status must be Open or Closed".to_string()))?;

    let job = JobRepository::update_status(state.db(), id, status.as_str())
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(|| ApiError::NotFound("Job not found".to_string()))?;

    Ok(Json(to_job_response(job)))
}

fn to_job_response(job: JobRecord) -> JobResponse {
    JobResponse {
        id: job.id.to_string(),
        posted_by: job.posted_by.to_string(),
        title: job.title,
        company: job.company,
        description: job.description,
        min_cgpa: job.min_cgpa.to_f64().unwrap_or(0.0),
        required_skills: job.required_skills,
        status: job.status,
        created_at: job.created_at,
    }
}
