//! JWT token issuance and verification
//!
//! The token codec signs `{sub, role, email, iat, exp}` with HMAC-SHA256
//! under a shared secret. Keys are pre-computed once at startup; the codec
//! knows nothing about HTTP or the credential store.

use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use placement_tracker_shared::errors::AuthError;
use placement_tracker_shared::models::Role;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Token claims
///
/// Exactly the identity a verified request is allowed to act as, and
/// nothing more sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Role at issuance time
    pub role: Role,
    /// Email at issuance time
    pub email: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Pre-computed HMAC keys
///
/// Deriving these is not free, so they are built once and cached in
/// AppState behind Arcs.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl TokenKeys {
    /// Create keys from the shared secret. Called once at startup, after
    /// config validation has rejected empty secrets.
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }

    pub fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}

/// Token service for issuance and verification
#[derive(Clone)]
pub struct TokenService {
    keys: TokenKeys,
    ttl_secs: i64,
}

impl TokenService {
    /// Create a new token service with pre-computed keys
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        Self {
            keys: TokenKeys::new(secret),
            ttl_secs,
        }
    }

    /// Issue a token for the given identity
    ///
    /// One uniform TTL applies to every issuance, registration and login
    /// alike.
    pub fn issue(&self, user_id: Uuid, role: Role, email: &str) -> Result<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.ttl_secs);

        let claims = Claims {
            sub: user_id.to_string(),
            role,
            email: email.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::default(), &claims, self.keys.encoding())
            .map_err(|e| anyhow::anyhow!("Failed to issue token: {}", e))
    }

    /// Verify a token and return its claims
    ///
    /// Signature and expiry are both checked. An authentic token past its
    /// expiry is `TokenExpired`; everything else is `InvalidToken`. Callers
    /// treat both as unauthenticated on the wire, the distinction exists
    /// for logs.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, self.keys.decoding(), &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken,
            })
    }

    /// Token lifetime in seconds
    #[inline]
    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }
}
