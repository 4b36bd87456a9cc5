//! Authentication routes
//!
//! Registration, login, and the authenticated user's own profile.
//! Password hashing runs on the blocking thread pool; token keys come
//! pre-computed from AppState.

use crate::auth::Principal;
use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use placement_tracker_shared::types::{
    AuthResponse, LoginRequest, RegisterRequest, UpdateMeRequest, UserResponse,
};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(me).put(update_me))
}

/// Register a new user
///
/// POST /api/v1/auth/register
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let response = UserService::register(&state.db, state.tokens(), req).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Login with email and password
///
/// POST /api/v1/auth/login
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let response = UserService::login(&state.db, state.tokens(), &req.email, &req.password).await?;
    Ok(Json(response))
}

/// Get the authenticated user's profile
///
/// GET /api/v1/auth/me
///
/// Requires a valid bearer token. Returns 404 when the token's subject no
/// longer resolves to an account.
async fn me(
    State(state): State<AppState>,
    principal: Principal,
) -> ApiResult<Json<UserResponse>> {
    let user = UserService::me(&state.db, principal.user_id).await?;
    Ok(Json(user))
}

/// Update the authenticated user's profile
///
/// PUT /api/v1/auth/me
async fn update_me(
    State(state): State<AppState>,
    principal: Principal,
    Json(req): Json<UpdateMeRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = UserService::update_me(&state.db, principal.user_id, req).await?;
    Ok(Json(user))
}
