//! User service: registration, login, and profile self-service
//!
//! The orchestration layer between the HTTP handlers, the credential
//! store, and the token codec. Response shaping happens here: every user
//! that leaves this module is the safe projection, and identity failures
//! collapse to generic messages before they reach the wire.

use crate::auth::{PasswordService, TokenService};
use crate::error::{is_unique_violation, ApiError};
use crate::repositories::{NewUser, UpdateUser, UserRecord, UserRepository};
use placement_tracker_shared::models::Role;
use placement_tracker_shared::types::{AuthResponse, RegisterRequest, UpdateMeRequest, UserResponse};
use placement_tracker_shared::validation;
use sqlx::PgPool;
use std::str::FromStr;
use uuid::Uuid;
use validator::ValidateEmail;

/// User service for authentication operations
pub struct UserService;

impl UserService {
    /// Register a new user
    ///
    /// Validation happens before any storage access. The pre-existence
    /// check gives a friendly conflict for the common case; the UNIQUE
    /// constraints catch the race where two registrations for the same
    /// identity arrive together.
    pub async fn register(
        pool: &PgPool,
        tokens: &TokenService,
        req: RegisterRequest,
    ) -> Result<AuthResponse, ApiError> {
        validation::validate_username(&req.username).map_err(ApiError::Validation)?;
        if !req.email.validate_email() {
            return Err(ApiError::Validation("Invalid email format".to_string()));
        }
        validation::validate_password(&req.password).map_err(ApiError::Validation)?;

        let email = req.email.trim().to_lowercase();
        let username = req.username.trim().to_string();
        let name = match req.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => username.clone(),
        };
        let role = req
            .role
            .as_deref()
            .map(Role::parse_lenient)
            .unwrap_or(Role::Student);

        if UserRepository::identity_exists(pool, &email, &username)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(conflict());
        }

        // Hash on the blocking thread pool (CPU-intensive)
        let password_hash = PasswordService::hash_async(req.password)
            .await
            .map_err(ApiError::Internal)?;

        let new_user = NewUser {
            name: &name,
            username: &username,
            email: &email,
            password_hash: &password_hash,
            role: role.as_str(),
        };

        let user = match UserRepository::create(pool, new_user).await {
            Ok(user) => user,
            Err(e) if is_unique_violation(&e) => return Err(conflict()),
            Err(e) => return Err(ApiError::Database(e)),
        };

        tracing::info!(user_id = %user.id, role = %role, "user registered");

        let token = tokens
            .issue(user.id, role, &user.email)
            .map_err(ApiError::Internal)?;

        Ok(AuthResponse {
            token,
            user: to_user_response(user)?,
        })
    }

    /// Login with email and password
    ///
    /// Unknown email and wrong password are indistinguishable on the wire,
    /// and both cost one argon2 verification: when no account matches, the
    /// candidate is verified against a dummy hash before the rejection.
    pub async fn login(
        pool: &PgPool,
        tokens: &TokenService,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        if email.is_empty() || password.is_empty() {
            return Err(ApiError::Validation(
                "email and password are required".to_string(),
            ));
        }

        let email = email.trim().to_lowercase();
        let user = UserRepository::find_by_email(pool, &email)
            .await
            .map_err(ApiError::Internal)?;

        let Some(user) = user else {
            let _ = PasswordService::verify_async(password.to_string(), PasswordService::dummy_hash())
                .await;
            return Err(invalid_credentials());
        };

        let valid = PasswordService::verify_async(password.to_string(), user.password_hash.clone())
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            return Err(invalid_credentials());
        }

        let role = parse_stored_role(&user)?;
        let token = tokens
            .issue(user.id, role, &user.email)
            .map_err(ApiError::Internal)?;

        Ok(AuthResponse {
            token,
            user: to_user_response(user)?,
        })
    }

    /// Fetch the authenticated user's own record
    ///
    /// The one place a valid token can still fail: the account may have
    /// been deleted after issuance.
    pub async fn me(pool: &PgPool, user_id: Uuid) -> Result<UserResponse, ApiError> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        to_user_response(user)
    }

    /// Update the authenticated user's own profile
    ///
    /// The password is re-hashed only when the request carried one; every
    /// other save leaves the stored hash untouched.
    pub async fn update_me(
        pool: &PgPool,
        user_id: Uuid,
        req: UpdateMeRequest,
    ) -> Result<UserResponse, ApiError> {
        let password_hash = match req.password {
            Some(password) => {
                validation::validate_password(&password).map_err(ApiError::Validation)?;
                Some(
                    PasswordService::hash_async(password)
                        .await
                        .map_err(ApiError::Internal)?,
                )
            }
            None => None,
        };

        let updates = UpdateUser {
            name: req.name,
            phone: req.phone,
            bio: req.bio,
            skills: req.skills,
            password_hash,
        };

        let user = UserRepository::update_profile(pool, user_id, updates)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        to_user_response(user)
    }
}

/// Generic conflict for any identity collision; never says which field.
fn conflict() -> ApiError {
    ApiError::Conflict("An account with that email or username already exists".to_string())
}

/// Generic login failure; never says whether the account exists.
fn invalid_credentials() -> ApiError {
    ApiError::Unauthorized("Invalid credentials".to_string())
}

fn parse_stored_role(user: &UserRecord) -> Result<Role, ApiError> {
    Role::from_str(&user.role)
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("corrupt role for user {}: {e}", user.id)))
}

/// Strip a record down to its safe projection.
fn to_user_response(user: UserRecord) -> Result<UserResponse, ApiError> {
    let role = parse_stored_role(&user)?;
    Ok(UserResponse {
        id: user.id.to_string(),
        name: user.name,
        username: user.username,
        email: user.email,
        role,
        phone: user.phone,
        bio: user.bio,
        skills: user.skills,
        created_at: user.created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(role: &str) -> UserRecord {
        UserRecord {
            id: Uuid::new_v4(),
            name: "Asha".to_string(),
            username: "asha".to_string(),
            email: "asha@example.com".to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$abc$def".to_string(),
            role: role.to_string(),
            phone: None,
            bio: None,
            skills: vec!["rust".to_string()],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_safe_projection_drops_password_hash() {
        let response = to_user_response(record("Student")).unwrap();
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("argon2id"));
        assert_eq!(response.role, Role::Student);
    }

    #[test]
    fn test_corrupt_stored_role_is_internal_error() {
        let result = to_user_response(record("superadmin"));
        assert!(matches!(result, Err(ApiError::Internal(_))));
    }

    #[test]
    fn test_conflict_message_does_not_name_the_field() {
        let msg = conflict().to_string();
        assert!(msg.contains("email or username"));
    }
}
