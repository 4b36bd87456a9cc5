//! Integration tests for authentication endpoints

mod common;

use axum::http::StatusCode;
use placement_tracker_shared::types::ErrorResponse;
use serde_json::json;

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_success() {
    let app = common::TestApp::new().await;

    let unique = uuid::Uuid::new_v4().simple().to_string();
    let body = json!({
        "username": format!("reg_{unique}"),
        "email": format!("reg_{unique}@example.com"),
        "password": "secret123",
        "role": "Student",
    });

    let (status, response) = app.post("/api/v1/auth/register", &body.to_string()).await;

    assert_eq!(status, StatusCode::CREATED);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert!(!response["token"].as_str().unwrap().is_empty());
    assert_eq!(response["user"]["role"], "Student");
    assert!(response["user"].get("password_hash").is_none());
    assert!(response["user"].get("password").is_none());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_then_me_round_trip() {
    let app = common::TestApp::new().await;

    let user = app.register_user("Student").await;
    let (status, response) = app.get_auth("/api/v1/auth/me", &user.token).await;

    assert_eq!(status, StatusCode::OK);
    assert!(response.contains(&user.email));
    assert!(!response.contains("password"));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_duplicate_email() {
    let app = common::TestApp::new().await;

    let unique = uuid::Uuid::new_v4().simple().to_string();
    let email = format!("dup_{unique}@example.com");

    let first = json!({
        "username": format!("dup_a_{unique}"),
        "email": email,
        "password": "secret123",
    });
    let (status, _) = app.post("/api/v1/auth/register", &first.to_string()).await;
    assert_eq!(status, StatusCode::CREATED);

    // Same email, different username
    let second = json!({
        "username": format!("dup_b_{unique}"),
        "email": email,
        "password": "secret123",
    });
    let (status, response) = app.post("/api/v1/auth/register", &second.to_string()).await;
    assert_eq!(status, StatusCode::CONFLICT);
    // The conflict never says which field collided
    assert!(response.contains("email or username"));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_duplicate_username() {
    let app = common::TestApp::new().await;

    let unique = uuid::Uuid::new_v4().simple().to_string();
    let username = format!("dupuser_{unique}");

    let first = json!({
        "username": username,
        "email": format!("dupuser_a_{unique}@example.com"),
        "password": "secret123",
    });
    let (status, _) = app.post("/api/v1/auth/register", &first.to_string()).await;
    assert_eq!(status, StatusCode::CREATED);

    let second = json!({
        "username": username,
        "email": format!("dupuser_b_{unique}@example.com"),
        "password": "secret123",
    });
    let (status, _) = app.post("/api/v1/auth/register", &second.to_string()).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_concurrent_duplicate_registration() {
    let app = common::TestApp::new().await;

    let unique = uuid::Uuid::new_v4().simple().to_string();
    let body = json!({
        "username": format!("race_{unique}"),
        "email": format!("race_{unique}@example.com"),
        "password": "secret123",
    })
    .to_string();

    // Both requests in flight together; the unique constraint must let
    // exactly one of them through.
    let (first, second) = tokio::join!(
        app.post("/api/v1/auth/register", &body),
        app.post("/api/v1/auth/register", &body),
    );

    let statuses = [first.0, second.0];
    assert!(statuses.contains(&StatusCode::CREATED), "one must succeed");
    assert!(
        statuses.contains(&StatusCode::CONFLICT),
        "one must observe the duplicate"
    );

    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1")
            .bind(format!("race_{unique}@example.com"))
            .fetch_one(&app.pool)
            .await
            .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_missing_fields() {
    let app = common::TestApp::new().await;

    let (status, _) = app.post("/api/v1/auth/register", "{}").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let no_password = json!({
        "username": "incomplete",
        "email": "incomplete@example.com",
    });
    let (status, _) = app
        .post("/api/v1/auth/register", &no_password.to_string())
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_invalid_email() {
    let app = common::TestApp::new().await;

    let body = json!({
        "username": "bademail",
        "email": "not-an-email",
        "password": "secret123",
    });

    let (status, _) = app.post("/api/v1/auth/register", &body.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_short_password() {
    let app = common::TestApp::new().await;

    let body = json!({
        "username": "shortpw",
        "email": "shortpw@example.com",
        "password": "123",
    });

    let (status, _) = app.post("/api/v1/auth/register", &body.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_normalizes_role_and_email() {
    let app = common::TestApp::new().await;

    let unique = uuid::Uuid::new_v4().simple().to_string();
    let body = json!({
        "username": format!("norm_{unique}"),
        "email": format!("NORM_{unique}@Example.COM"),
        "password": "secret123",
        "role": "placement cell",
    });

    let (status, response) = app.post("/api/v1/auth/register", &body.to_string()).await;
    assert_eq!(status, StatusCode::CREATED);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert_eq!(response["user"]["role"], "PlacementCell");
    assert_eq!(
        response["user"]["email"],
        format!("norm_{unique}@example.com")
    );
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_stored_hash_is_not_the_password() {
    let app = common::TestApp::new().await;

    let user = app.register_user("Student").await;
    let hash: String = sqlx::query_scalar("SELECT password_hash FROM users WHERE email = $1")
        .bind(&user.email)
        .fetch_one(&app.pool)
        .await
        .unwrap();

    assert_ne!(hash, user.password);
    assert!(!hash.contains(&user.password));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_success() {
    let app = common::TestApp::new().await;

    let user = app.register_user("Student").await;
    let body = json!({ "email": user.email, "password": user.password });

    let (status, response) = app.post("/api/v1/auth/login", &body.to_string()).await;

    assert_eq!(status, StatusCode::OK);

    let response: serde_json::Value = serde_json::from_str(&response).unwrap();
    assert!(!response["token"].as_str().unwrap().is_empty());
    assert!(response["user"].get("password_hash").is_none());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_wrong_password_matches_unknown_email() {
    let app = common::TestApp::new().await;

    let user = app.register_user("Student").await;

    let wrong_password = json!({ "email": user.email, "password": "wrong-password" });
    let (status_a, body_a) = app
        .post("/api/v1/auth/login", &wrong_password.to_string())
        .await;

    let unknown_email = json!({
        "email": "nobody@example.com",
        "password": "wrong-password",
    });
    let (status_b, body_b) = app
        .post("/api/v1/auth/login", &unknown_email.to_string())
        .await;

    // Identical failures: nothing reveals whether the account exists
    assert_eq!(status_a, StatusCode::UNAUTHORIZED);
    assert_eq!(status_b, StatusCode::UNAUTHORIZED);
    assert_eq!(body_a, body_b);

    let parsed: ErrorResponse = serde_json::from_str(&body_a).unwrap();
    assert_eq!(parsed.error.message, "Invalid credentials");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_me_after_account_deleted() {
    let app = common::TestApp::new().await;

    let user = app.register_user("Student").await;
    sqlx::query("DELETE FROM users WHERE email = $1")
        .bind(&user.email)
        .execute(&app.pool)
        .await
        .unwrap();

    // Token still verifies, but the subject is gone
    let (status, _) = app.get_auth("/api/v1/auth/me", &user.token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_me_without_password_keeps_hash() {
    let app = common::TestApp::new().await;

    let user = app.register_user("Student").await;
    let before: String = sqlx::query_scalar("SELECT password_hash FROM users WHERE email = $1")
        .bind(&user.email)
        .fetch_one(&app.pool)
        .await
        .unwrap();

    let body = json!({ "name": "New Name", "skills": ["rust", "sql"] });
    let (status, response) = app
        .put_auth("/api/v1/auth/me", &body.to_string(), &user.token)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(response.contains("New Name"));

    let after: String = sqlx::query_scalar("SELECT password_hash FROM users WHERE email = $1")
        .bind(&user.email)
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_me_with_password_rotates_credential() {
    let app = common::TestApp::new().await;

    let user = app.register_user("Student").await;

    let body = json!({ "password": "brand-new-secret" });
    let (status, _) = app
        .put_auth("/api/v1/auth/me", &body.to_string(), &user.token)
        .await;
    assert_eq!(status, StatusCode::OK);

    // Old password stops working, new one logs in
    let old = json!({ "email": user.email, "password": user.password });
    let (status, _) = app.post("/api/v1/auth/login", &old.to_string()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let new = json!({ "email": user.email, "password": "brand-new-secret" });
    let (status, _) = app.post("/api/v1/auth/login", &new.to_string()).await;
    assert_eq!(status, StatusCode::OK);
}
