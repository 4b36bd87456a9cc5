//! Error types for the placement tracker

use thiserror::Error;

/// Authentication error types
///
/// The variants keep the internal distinction (expired vs tampered vs
/// missing) for logging; the HTTP layer collapses all of them into a
/// generic 401 body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("token expired")]
    TokenExpired,

    #[error("invalid token")]
    InvalidToken,

    #[error("missing token")]
    MissingToken,
}
