//! HTTP-level integration tests for the public availability endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

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

/// Insert a schedule entry directly.
async fn schedule_room(pool: &PgPool, room_id: i64, start: &str, end: &str, status: &str) {
    sqlx::query(
        "INSERT INTO room_schedules (room_id, start_date, end_date, status)
         VALUES ($1, $2::date, $3::date, $4)",
    )
    .bind(room_id)
    .bind(start)
    .bind(end)
    .bind(status)
    .execute(pool)
    .await
    .expect("schedule creation should succeed");
}

/// The available-rooms listing excludes rooms with an occupied overlap.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_available_rooms(pool: PgPool) {
    let busy = create_room(&pool, "Garden Suite").await;
    let free = create_room(&pool, "Meadow Den").await;
    schedule_room(&pool, busy, "2026-07-01", "2026-07-10", "occupied").await;

    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/api/v1/rooms/available?start_date=2026-07-05&end_date=2026-07-12",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let rooms = json["data"].as_array().unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0]["id"], free);
}

/// Only `occupied` entries block; maintenance and available entries do not.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_non_occupied_entries_do_not_block(pool: PgPool) {
    let room = create_room(&pool, "Garden Suite").await;
    schedule_room(&pool, room, "2026-07-01", "2026-07-10", "maintenance").await;
    schedule_room(&pool, room, "2026-07-01", "2026-07-10", "available").await;

    let app = common::build_test_app(pool);
    let response = get(
        app,
        &format!("/api/v1/rooms/{room}/availability?start_date=2026-07-05&end_date=2026-07-12"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["available"], true);
    assert_eq!(json["data"]["room_id"], room);
}

/// The per-room check reports an occupied overlap as unavailable.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_room_availability_check(pool: PgPool) {
    let room = create_room(&pool, "Garden Suite").await;
    schedule_room(&pool, room, "2026-07-01", "2026-07-10", "occupied").await;

    let app = common::build_test_app(pool.clone());
    let response = get(
        app,
        &format!("/api/v1/rooms/{room}/availability?start_date=2026-07-05&end_date=2026-07-12"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["available"], false);

    // Disjoint range is free.
    let app = common::build_test_app(pool);
    let response = get(
        app,
        &format!("/api/v1/rooms/{room}/availability?start_date=2026-08-01&end_date=2026-08-05"),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["available"], true);
}

/// An inverted or zero-length query range returns 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_availability_invalid_range(pool: PgPool) {
    let room = create_room(&pool, "Garden Suite").await;

    let app = common::build_test_app(pool.clone());
    let response = get(
        app,
        &format!("/api/v1/rooms/{room}/availability?start_date=2026-07-12&end_date=2026-07-05"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/api/v1/rooms/available?start_date=2026-07-05&end_date=2026-07-05",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Checking availability for an unknown room returns 404.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_availability_unknown_room(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/api/v1/rooms/9999/availability?start_date=2026-07-05&end_date=2026-07-12",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
