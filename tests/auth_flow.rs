//! Verification-flow tests against a real Postgres. `#[sqlx::test]`
//! provisions a fresh database per test and applies `migrations/`; they run
//! when `DATABASE_URL` points at a reachable server.

mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

use neokcs_back::{
    models::User,
    queries::{user_queries, verification_queries},
    routes,
};

fn router(pool: PgPool) -> Router {
    routes::create_router(common::test_state(pool))
}

fn verify_request(email: &str, code: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/auth/verify-code")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "email": email, "code": code }).to_string()))
        .unwrap()
}

async fn approved_user(pool: &PgPool, email: &str) -> User {
    let user = user_queries::create_user(pool, email).await.unwrap();
    sqlx::query("UPDATE users SET is_allow = TRUE WHERE id = $1")
        .bind(user.id)
        .execute(pool)
        .await
        .unwrap();
    user
}

#[sqlx::test]
async fn code_is_single_use(pool: PgPool) {
    approved_user(&pool, "admin@x.com").await;
    verification_queries::create_verification_code(&pool, "admin@x.com", "123456")
        .await
        .unwrap();

    let app = router(pool.clone());

    let first = app
        .clone()
        .oneshot(verify_request("admin@x.com", "123456"))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    let cookie = first.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(cookie.starts_with("session-token="));

    let second = app
        .oneshot(verify_request("admin@x.com", "123456"))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);

    let (used,): (bool,) =
        sqlx::query_as("SELECT used FROM verification_codes WHERE email = 'admin@x.com'")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert!(used);
}

#[sqlx::test]
async fn expired_code_is_rejected(pool: PgPool) {
    approved_user(&pool, "admin@x.com").await;
    sqlx::query(
        "INSERT INTO verification_codes (email, code, expires_at)
         VALUES ('admin@x.com', '123456', NOW() - INTERVAL '1 minute')",
    )
    .execute(&pool)
    .await
    .unwrap();

    let response = router(pool.clone())
        .oneshot(verify_request("admin@x.com", "123456"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // A rejected code is not spent.
    let (used,): (bool,) =
        sqlx::query_as("SELECT used FROM verification_codes WHERE email = 'admin@x.com'")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert!(!used);
}

#[sqlx::test]
async fn wrong_code_leaves_the_original_unused(pool: PgPool) {
    approved_user(&pool, "admin@x.com").await;
    verification_queries::create_verification_code(&pool, "admin@x.com", "123456")
        .await
        .unwrap();

    let response = router(pool.clone())
        .oneshot(verify_request("admin@x.com", "654321"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let (used,): (bool,) =
        sqlx::query_as("SELECT used FROM verification_codes WHERE code = '123456'")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert!(!used);
}

#[sqlx::test]
async fn first_time_registrant_is_persisted_but_denied(pool: PgPool) {
    verification_queries::create_verification_code(&pool, "new@x.com", "123456")
        .await
        .unwrap();

    let response = router(pool.clone())
        .oneshot(verify_request("new@x.com", "123456"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(response.headers().get(header::SET_COOKIE).is_none());

    let user = user_queries::find_by_email(&pool, "new@x.com")
        .await
        .unwrap()
        .expect("user row created despite denial");
    assert!(!user.is_allow);

    let (sessions,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sessions")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(sessions, 0);
}

#[sqlx::test]
async fn consume_code_succeeds_exactly_once(pool: PgPool) {
    let code = verification_queries::create_verification_code(&pool, "admin@x.com", "123456")
        .await
        .unwrap();

    assert!(verification_queries::consume_code(&pool, code.id)
        .await
        .unwrap());
    assert!(!verification_queries::consume_code(&pool, code.id)
        .await
        .unwrap());
}
