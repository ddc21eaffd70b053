//! HTTP-level integration tests for session auth endpoints.
//!
//! Tests cover login, the generic invalid-credentials response, inactive
//! accounts, session-protected routes, and logout revocation.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json, post_json_auth};
use pawstay_api::auth::password::hash_password;
use pawstay_db::models::user::CreateUser;
use pawstay_db::repositories::UserRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create a test admin directly in the database and return the user row
/// plus the plaintext password used.
async fn create_test_user(
    pool: &PgPool,
    username: &str,
) -> (pawstay_db::models::user::User, String) {
    let password = "test_password_123!";
    let hashed = hash_password(password).expect("hashing should succeed");
    let input = CreateUser {
        username: username.to_string(),
        email: format!("{username}@test.com"),
        password_hash: hashed,
    };
    let user = UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed");
    (user, password.to_string())
}

/// Log in via the API and return the JSON response containing `token`,
/// `csrf_token`, `expires_at`, and `user` info.
async fn login_user(app: axum::Router, username: &str, password: &str) -> serde_json::Value {
    let body = serde_json::json!({ "username": username, "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// Successful login returns 200 with a session token, CSRF token, and user info.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "loginuser").await;
    let app = common::build_test_app(pool);

    let json = login_user(app, "loginuser", &password).await;

    assert!(json["token"].is_string(), "response must contain token");
    assert!(json["csrf_token"].is_string(), "response must contain csrf_token");
    assert!(json["expires_at"].is_string(), "response must contain expires_at");
    assert_eq!(json["user"]["id"], user.id);
    assert_eq!(json["user"]["username"], "loginuser");
    assert_eq!(json["user"]["email"], "loginuser@test.com");
    assert!(
        json["user"]["password_hash"].is_null(),
        "password hash must never be serialized"
    );
}

/// Login stamps `last_login_at`.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_records_last_login(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "stamped").await;
    assert!(user.last_login_at.is_none());

    let app = common::build_test_app(pool.clone());
    login_user(app, "stamped", &password).await;

    let refreshed = UserRepo::find_by_id(&pool, user.id)
        .await
        .expect("lookup should succeed")
        .expect("user should exist");
    assert!(refreshed.last_login_at.is_some(), "login must stamp last_login_at");
}

/// Login with an incorrect password returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    let (_user, _password) = create_test_user(&pool, "wrongpw").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "wrongpw", "password": "incorrect_password" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Login with a nonexistent username returns the same 401 body as a wrong
/// password, so the endpoint cannot be used to enumerate accounts.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_unknown_user_is_indistinguishable(pool: PgPool) {
    let (_user, _password) = create_test_user(&pool, "realuser").await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "username": "ghost", "password": "whatever" });
    let unknown = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
    let unknown_json = body_json(unknown).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "username": "realuser", "password": "bad" });
    let wrong = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
    let wrong_json = body_json(wrong).await;

    assert_eq!(unknown_json, wrong_json, "both failures must return the same body");
}

/// Login to a deactivated account returns 403.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_inactive_user(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "inactive").await;
    sqlx::query("UPDATE users SET is_active = false WHERE id = $1")
        .bind(user.id)
        .execute(&pool)
        .await
        .expect("deactivation should succeed");

    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "inactive", "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// A wrong password against a deactivated account returns the generic 401,
/// not 403, so the account's existence is only revealed to someone who
/// already holds its password.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_inactive_user_wrong_password_is_generic(pool: PgPool) {
    let (user, _password) = create_test_user(&pool, "dormant").await;
    sqlx::query("UPDATE users SET is_active = false WHERE id = $1")
        .bind(user.id)
        .execute(&pool)
        .await
        .expect("deactivation should succeed");

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "username": "dormant", "password": "bad" });
    let inactive = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(inactive.status(), StatusCode::UNAUTHORIZED);
    let inactive_json = body_json(inactive).await;

    let app = common::build_test_app(pool);
    let body = serde_json::json!({ "username": "ghost", "password": "bad" });
    let unknown = post_json(app, "/api/v1/auth/login", body).await;
    let unknown_json = body_json(unknown).await;

    assert_eq!(inactive_json, unknown_json, "both failures must return the same body");
}

// ---------------------------------------------------------------------------
// Session-protected routes
// ---------------------------------------------------------------------------

/// A valid session token grants access to admin routes.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_session_grants_admin_access(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "adminuser").await;

    let app = common::build_test_app(pool.clone());
    let login = login_user(app, "adminuser", &password).await;
    let token = login["token"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/admin/reservations", token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// Admin routes without a token return 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_route_requires_session(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/api/v1/admin/reservations").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A made-up token returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_garbage_token_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/admin/reservations", "not-a-real-token").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// GET /auth/me returns the authenticated identity.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_me_returns_identity(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "whoami").await;

    let app = common::build_test_app(pool.clone());
    let login = login_user(app, "whoami", &password).await;
    let token = login["token"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/auth/me", token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], user.id);
    assert_eq!(json["username"], "whoami");
}

// ---------------------------------------------------------------------------
// Logout
// ---------------------------------------------------------------------------

/// Logout revokes the session; subsequent requests with the same token fail.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_logout_revokes_session(pool: PgPool) {
    let (_user, password) = create_test_user(&pool, "leaver").await;

    let app = common::build_test_app(pool.clone());
    let login = login_user(app, "leaver", &password).await;
    let token = login["token"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    let response =
        post_json_auth(app, "/api/v1/auth/logout", token, serde_json::json!({})).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/admin/reservations", token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
