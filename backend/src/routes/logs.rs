//! Work log routes
//!
//! Any authenticated user can list entries and record their own; deletion
//! is a placement-cell operation.

use crate::auth::{authenticate, require_roles, Principal};
use crate::error::{ApiError, ApiResult};
use crate::repositories::{NewWorkLog, WorkLogRecord, WorkLogRepository};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    routing::{delete, get},
    Json, Router,
};
use placement_tracker_shared::models::{Role, WorkLogKind};
use placement_tracker_shared::types::{CreateWorkLogRequest, WorkLogResponse};
use placement_tracker_shared::validation;
use serde::Deserialize;
use std::str::FromStr;
use uuid::Uuid;

const ADMIN_ROLES: &[Role] = &[Role::PlacementCell];

/// Create work log routes
pub fn log_routes(state: AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/:id", delete(delete_log))
        .route_layer(middleware::from_fn(|req: Request, next: Next| {
            require_roles(ADMIN_ROLES, req, next)
        }));

    Router::new()
        .route("/", get(list_logs).post(create_log))
        .merge(admin)
        .route_layer(middleware::from_fn_with_state(state, authenticate))
}

/// Query filters for the log listing
#[derive(Debug, Deserialize)]
struct LogFilters {
    user_id: Option<Uuid>,
}

/// GET /api/v1/logs - List entries, optionally for one user
async fn list_logs(
    State(state): State<AppState>,
    Query(filters): Query<LogFilters>,
) -> ApiResult<Json<Vec<WorkLogResponse>>> {
    let logs = WorkLogRepository::list(state.db(), filters.user_id, 200)
        .await
        .map_err(ApiError::Internal)?;

    Ok(Json(logs.into_iter().map(to_log_response).collect()))
}

/// POST /api/v1/logs - Record an entry for the caller
async fn create_log(
    State(state): State<AppState>,
    principal: Principal,
    Json(req): Json<CreateWorkLogRequest>,
) -> ApiResult<(StatusCode, Json<WorkLogResponse>)> {
    validation::validate_time_spent_hours(req.time_spent_hours).map_err(ApiError::Validation)?;
    let kind = WorkLogKind::from_str(&req.kind).map_err(ApiError::Validation)?;

    let new_log = NewWorkLog {
        user_id: Some(principal.user_id),
        time_spent_hours: req.time_spent_hours,
        kind: kind.as_str().to_string(),
        task_ticket: req.task_ticket,
        comment: req.comment,
    };

    let log = WorkLogRepository::create(state.db(), new_log)
        .await
        .map_err(ApiError::Internal)?;

    Ok((StatusCode::CREATED, Json(to_log_response(log))))
}

/// DELETE /api/v1/logs/:id - Remove an entry (PlacementCell)
async fn delete_log(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    let deleted = WorkLogRepository::delete(state.db(), id)
        .await
        .map_err(ApiError::Internal)?;

    if !deleted {
        return Err(ApiError::NotFound("Log not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

fn to_log_response(log: WorkLogRecord) -> WorkLogResponse {
    WorkLogResponse {
        id: log.id.to_string(),
        user_id: log.user_id.map(|id| id.to_string()),
        time_spent_hours: log.time_spent_hours,
        kind: log.kind,
        task_ticket: log.task_ticket,
        comment: log.comment,
        created_at: log.created_at,
    }
}
