//! Authentication and authorization middleware
//!
//! Authentication turns a bearer token into a [`Principal`] attached to
//! the request for its lifetime; authorization compares that principal's
//! role against a route group's allowed set. The wire response never says
//! which way verification failed; the internal log does.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{FromRef, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use placement_tracker_shared::errors::AuthError;
use placement_tracker_shared::models::Role;
use uuid::Uuid;

use super::jwt::Claims;

/// Authenticated identity, reconstructed fresh for each request from a
/// verified token. Never persisted or shared across requests.
#[derive(Debug, Clone)]
pub struct Principal {
    pub user_id: Uuid,
    pub role: Role,
    pub email: String,
}

impl Principal {
    fn from_claims(claims: &Claims) -> Result<Self, AuthError> {
        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidToken)?;
        Ok(Self {
            user_id,
            role: claims.role,
            email: claims.email.clone(),
        })
    }
}

/// Pull the token out of `Authorization: Bearer <token>`.
fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    value.strip_prefix("Bearer ").ok_or(AuthError::MissingToken)
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for Principal
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // The group-level middleware may already have verified this request.
        if let Some(principal) = parts.extensions.get::<Principal>() {
            return Ok(principal.clone());
        }

        let app_state = AppState::from_ref(state);
        let token = bearer_token(&parts.headers)?;
        let claims = app_state.tokens().verify(token).map_err(|e| {
            tracing::debug!(error = %e, "bearer token rejected");
            e
        })?;

        Ok(Principal::from_claims(&claims)?)
    }
}

/// Authentication layer for a route group
///
/// Verifies the bearer token and attaches the [`Principal`] to the request
/// extensions for downstream middleware and handlers. Rejected requests
/// never reach a handler, so no storage access happens for them.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers())?;
    let claims = state.tokens().verify(token).map_err(|e| {
        tracing::debug!(error = %e, "bearer token rejected");
        e
    })?;
    let principal = Principal::from_claims(&claims)?;

    request.extensions_mut().insert(principal);
    Ok(next.run(request).await)
}

/// Role gate for a route group
///
/// Requires [`authenticate`] to have run earlier in the chain; a request
/// without a principal is unauthenticated, a principal outside the allowed
/// set is forbidden. One implementation serves every gated group,
/// parameterized only by the allowed slice:
///
/// ```ignore
/// .route_layer(middleware::from_fn(|req: Request, next: Next| {
///     require_roles(&[Role::PlacementCell], req, next)
/// }))
/// ```
pub async fn require_roles(
    allowed: &'static [Role],
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let principal = request
        .extensions()
        .get::<Principal>()
        .ok_or(AuthError::MissingToken)?;

    if !allowed.contains(&principal.role) {
        return Err(ApiError::Forbidden("Insufficient role".to_string()));
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token_missing_header() {
        let headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), Err(AuthError::MissingToken));
    }

    #[test]
    fn test_bearer_token_wrong_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));
        assert_eq!(bearer_token(&headers), Err(AuthError::MissingToken));
    }

    #[test]
    fn test_bearer_token_extracted() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def.ghi"));
        assert_eq!(bearer_token(&headers), Ok("abc.def.ghi"));
    }

    #[test]
    fn test_principal_from_claims() {
        let user_id = Uuid::new_v4();
        let claims = Claims {
            sub: user_id.to_string(),
            role: Role::Mentor,
            email: "m@x.com".to_string(),
            iat: 0,
            exp: 0,
        };

        let principal = Principal::from_claims(&claims).unwrap();
        assert_eq!(principal.user_id, user_id);
        assert_eq!(principal.role, Role::Mentor);
        assert_eq!(principal.email, "m@x.com");
    }

    #[test]
    fn test_principal_rejects_malformed_subject() {
        let claims = Claims {
            sub: "not-a-uuid".to_string(),
            role: Role::Student,
            email: "s@x.com".to_string(),
            iat: 0,
            exp: 0,
        };

        assert_eq!(
            Principal::from_claims(&claims).unwrap_err(),
            AuthError::InvalidToken
        );
    }
}
