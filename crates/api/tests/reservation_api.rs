//! HTTP-level integration tests for the booking workflow.
//!
//! Covers public reservation creation (validation, overlap rejection,
//! schedule side effects) and the admin status management endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, patch_json_auth, post_json};
use pawstay_api::auth::password::hash_password;
use pawstay_db::models::user::CreateUser;
use pawstay_db::repositories::UserRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create an admin and return a live session token.
async fn admin_token(pool: &PgPool) -> String {
    let password = "test_password_123!";
    let hashed = hash_password(password).expect("hashing should succeed");
    UserRepo::create(
        pool,
        &CreateUser {
            username: "admin".to_string(),
            email: "admin@test.com".to_string(),
            password_hash: hashed,
        },
    )
    .await
    .expect("user creation should succeed");

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "username": "admin", "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["token"].as_str().unwrap().to_string()
}

/// Insert a room directly and return its ID.
async fn create_room(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO rooms (name, description) VALUES ($1, 'A cosy room') RETURNING id",
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .expect("room creation should succeed")
}

/// Insert an occupied schedule entry directly.
async fn occupy_room(pool: &PgPool, room_id: i64, start: &str, end: &str) {
    sqlx::query(
        "INSERT INTO room_schedules (room_id, start_date, end_date, status)
         VALUES ($1, $2::date, $3::date, 'occupied')",
    )
    .bind(room_id)
    .bind(start)
    .bind(end)
    .execute(pool)
    .await
    .expect("schedule creation should succeed");
}

/// A well-formed booking request body.
fn booking_body(room_id: Option<i64>, start: &str, end: &str) -> serde_json::Value {
    serde_json::json!({
        "customer_name": "Ada Lovelace",
        "email": "ada@example.com",
        "phone": "+33 6 12 34 56 78",
        "start_date": start,
        "end_date": end,
        "room_id": room_id,
        "animal_count": 2,
        "animals": [
            { "name": "Rex", "species": "dog", "services": ["walk"] },
            { "name": "Misha", "species": "cat" }
        ],
        "message": "Rex needs his evening walk."
    })
}

// ---------------------------------------------------------------------------
// Public booking
// ---------------------------------------------------------------------------

/// A valid booking is stored as `pending` and blocks the preferred room.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_reservation_success(pool: PgPool) {
    let room_id = create_room(&pool, "Garden Suite").await;
    let app = common::build_test_app(pool.clone());

    let response = post_json(
        app,
        "/api/v1/reservations",
        booking_body(Some(room_id), "2026-07-05", "2026-07-12"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "pending");
    assert_eq!(json["data"]["customer_name"], "Ada Lovelace");
    assert_eq!(json["data"]["animal_count"], 2);

    // The preferred room gets an occupied schedule entry for the stay.
    let count: i64 = sqlx::query_scalar(
        "SELECT count(*) FROM room_schedules WHERE room_id = $1 AND status = 'occupied'",
    )
    .bind(room_id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(count, 1, "booking must write an occupied schedule entry");
}

/// A booking without a room preference succeeds and writes no schedule entry.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_reservation_without_room(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let response = post_json(
        app,
        "/api/v1/reservations",
        booking_body(None, "2026-07-05", "2026-07-12"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let count: i64 = sqlx::query_scalar("SELECT count(*) FROM room_schedules")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

/// Markup in free-text fields is stripped before persistence.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_reservation_strips_markup(pool: PgPool) {
    let app = common::build_test_app(pool);

    let mut body = booking_body(None, "2026-07-05", "2026-07-12");
    body["customer_name"] = "<script>alert(1)</script>Ada".into();
    body["message"] = "<b>bold</b> request".into();

    let response = post_json(app, "/api/v1/reservations", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["customer_name"], "alert(1)Ada");
    assert_eq!(json["data"]["message"], "bold request");
}

/// A missing customer name returns 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_reservation_missing_name(pool: PgPool) {
    let app = common::build_test_app(pool);

    let mut body = booking_body(None, "2026-07-05", "2026-07-12");
    body["customer_name"] = "   ".into();

    let response = post_json(app, "/api/v1/reservations", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// A malformed email returns 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_reservation_bad_email(pool: PgPool) {
    let app = common::build_test_app(pool);

    let mut body = booking_body(None, "2026-07-05", "2026-07-12");
    body["email"] = "not-an-email".into();

    let response = post_json(app, "/api/v1/reservations", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// An end date on or before the start date returns 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_reservation_inverted_dates(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/reservations",
        booking_body(None, "2026-07-12", "2026-07-05"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Zero-length stays are rejected too.
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/reservations",
        booking_body(None, "2026-07-05", "2026-07-05"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// An animal count below one returns 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_reservation_zero_animals(pool: PgPool) {
    let app = common::build_test_app(pool);

    let mut body = booking_body(None, "2026-07-05", "2026-07-12");
    body["animal_count"] = 0.into();
    body["animals"] = serde_json::json!([]);

    let response = post_json(app, "/api/v1/reservations", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// A booking for a nonexistent room returns 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_reservation_unknown_room(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/reservations",
        booking_body(Some(9999), "2026-07-05", "2026-07-12"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// A booking overlapping an occupied range is rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_reservation_overlap_rejected(pool: PgPool) {
    let room_id = create_room(&pool, "Garden Suite").await;
    occupy_room(&pool, room_id, "2026-07-01", "2026-07-10").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/reservations",
        booking_body(Some(room_id), "2026-07-05", "2026-07-12"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Date ranges touch inclusively: a stay starting on the occupied end date
/// is still blocked, one starting the day after is accepted.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_reservation_boundary_dates(pool: PgPool) {
    let room_id = create_room(&pool, "Garden Suite").await;
    occupy_room(&pool, room_id, "2026-07-01", "2026-07-10").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/reservations",
        booking_body(Some(room_id), "2026-07-10", "2026-07-15"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST, "shared day must block");

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/reservations",
        booking_body(Some(room_id), "2026-07-11", "2026-07-15"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED, "day after must be free");
}

// ---------------------------------------------------------------------------
// Admin management
// ---------------------------------------------------------------------------

/// Listing supports the status filter, and unknown filter values are rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_reservations_filter(pool: PgPool) {
    let token = admin_token(&pool).await;

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/reservations",
        booking_body(None, "2026-07-05", "2026-07-12"),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/admin/reservations?status=pending", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/api/v1/admin/reservations?status=confirmed", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/admin/reservations?status=bogus", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// The status can move to `confirmed`, and an invalid value leaves the
/// stored status untouched.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_reservation_status(pool: PgPool) {
    let token = admin_token(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/reservations",
        booking_body(None, "2026-07-05", "2026-07-12"),
    )
    .await;
    let created = body_json(response).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = patch_json_auth(
        app,
        &format!("/api/v1/admin/reservations/{id}/status"),
        &token,
        serde_json::json!({ "status": "confirmed" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "confirmed");

    let app = common::build_test_app(pool.clone());
    let response = patch_json_auth(
        app,
        &format!("/api/v1/admin/reservations/{id}/status"),
        &token,
        serde_json::json!({ "status": "archived" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let stored: String = sqlx::query_scalar("SELECT status FROM reservations WHERE id = $1")
        .bind(id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, "confirmed", "rejected transition must not change the row");
}

/// Updating a nonexistent reservation returns 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_missing_reservation(pool: PgPool) {
    let token = admin_token(&pool).await;

    let app = common::build_test_app(pool);
    let response = patch_json_auth(
        app,
        "/api/v1/admin/reservations/424242/status",
        &token,
        serde_json::json!({ "status": "cancelled" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Creating a reservation must succeed when no mailer is configured.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_booking_succeeds_without_mailer(pool: PgPool) {
    // build_test_app never configures a mailer; a 201 here proves email
    // delivery is genuinely best-effort.
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/reservations",
        booking_body(None, "2026-07-05", "2026-07-12"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

/// Creating a reservation must succeed when a mailer is configured but
/// every delivery attempt fails.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_booking_succeeds_when_mail_delivery_fails(pool: PgPool) {
    // Both the confirmation and the operator notification hit an
    // unreachable SMTP server; the booking must still go through.
    let app = common::build_test_app_with_failing_mailer(pool.clone());
    let response = post_json(
        app,
        "/api/v1/reservations",
        booking_body(None, "2026-07-05", "2026-07-12"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "pending");

    let count: i64 = sqlx::query_scalar("SELECT count(*) FROM reservations")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1, "the reservation must be stored despite mail failures");
}
