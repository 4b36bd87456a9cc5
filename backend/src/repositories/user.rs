//! User repository: the credential store
//!
//! Owns the `users` table. The UNIQUE constraints on email and username
//! are the synchronization point for concurrent registrations; `create`
//! returns the raw `sqlx::Error` so the service layer can map a unique
//! violation to a conflict instead of a server error.

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// User record from database
///
/// The only place a password hash lives in memory; it never crosses into
/// a response type.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a user; the password is already hashed
#[derive(Debug, Clone)]
pub struct NewUser<'a> {
    pub name: &'a str,
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub role: &'a str,
}

/// Input for updating a user's own profile
///
/// `password_hash` is set only when the caller supplied a new plaintext
/// password; absent fields leave the stored values untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<Vec<String>>,
    pub password_hash: Option<String>,
}

const USER_COLUMNS: &str = "id, name, username, email, password_hash, role, phone, bio, skills, created_at, updated_at";

/// User repository for database operations
pub struct UserRepository;

impl UserRepository {
    /// Insert a new user
    ///
    /// Duplicate email or username surfaces as a database unique violation,
    /// even when two registrations race.
    pub async fn create(pool: &PgPool, new_user: NewUser<'_>) -> Result<UserRecord, sqlx::Error> {
        let user = sqlx::query_as::<_, UserRecord>(&format!(
            r#"
            INSERT INTO users (name, username, email, password_hash, role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {USER_COLUMNS}
            "#,
        ))
        .bind(new_user.name)
        .bind(new_user.username)
        .bind(new_user.email)
        .bind(new_user.password_hash)
        .bind(new_user.role)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Find user by email
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(&format!(
            r#"
            SELECT {USER_COLUMNS}
            FROM users
            WHERE email = $1
            "#,
        ))
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(&format!(
            r#"
            SELECT {USER_COLUMNS}
            FROM users
            WHERE id = $1
            "#,
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Check whether an email or username is already taken
    pub async fn identity_exists(pool: &PgPool, email: &str, username: &str) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM users WHERE email = $1 OR username = $2)
            "#,
        )
        .bind(email)
        .bind(username)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Update a user's profile fields
    ///
    /// Returns `None` when the id no longer resolves to a user.
    pub async fn update_profile(
        pool: &PgPool,
        id: Uuid,
        updates: UpdateUser,
    ) -> Result<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(&format!(
            r#"
            UPDATE users SET
                name = COALESCE($2, name),
                phone = COALESCE($3, phone),
                bio = COALESCE($4, bio),
                skills = COALESCE($5, skills),
                password_hash = COALESCE($6, password_hash),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#,
        ))
        .bind(id)
        .bind(updates.name)
        .bind(updates.phone)
        .bind(updates.bio)
        .bind(updates.skills)
        .bind(updates.password_hash)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    // Credential store behavior is covered by the DB-backed integration
    // tests. Run with: cargo test --features integration -- --ignored
}
