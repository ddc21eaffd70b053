//! Handlers for rooms: public browsing/availability and admin CRUD.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::NaiveDate;
use pawstay_core::availability::DateRange;
use pawstay_core::error::CoreError;
use pawstay_core::sanitize::{strip_markup, strip_markup_opt};
use pawstay_core::types::DbId;
use pawstay_core::validate::require_non_empty;
use pawstay_db::models::room::{CreateRoom, UpdateRoom};
use pawstay_db::repositories::{RoomRepo, ScheduleRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for availability lookups.
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Response for the per-room availability check.
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub room_id: DbId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub available: bool,
}

// ---------------------------------------------------------------------------
// Public endpoints
// ---------------------------------------------------------------------------

/// GET /api/v1/rooms
pub async fn list_rooms(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rooms = RoomRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: rooms }))
}

/// GET /api/v1/rooms/{id}
pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let room = RoomRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Room", id }))?;

    Ok(Json(DataResponse { data: room }))
}

/// GET /api/v1/rooms/available?start_date=...&end_date=...
///
/// Rooms with no occupied schedule entry overlapping the range.
pub async fn list_available_rooms(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> AppResult<impl IntoResponse> {
    let range = DateRange::new(query.start_date, query.end_date)?;

    let rooms =
        ScheduleRepo::list_available_rooms(&state.pool, range.start(), range.end()).await?;
    Ok(Json(DataResponse { data: rooms }))
}

/// GET /api/v1/rooms/{id}/availability?start_date=...&end_date=...
///
/// Whether one room can be booked for the range.
pub async fn check_room_availability(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(query): Query<AvailabilityQuery>,
) -> AppResult<impl IntoResponse> {
    let range = DateRange::new(query.start_date, query.end_date)?;

    let room = RoomRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Room", id }))?;

    let available = ScheduleRepo::room_is_available(&state.pool, room.id, &range).await?;

    Ok(Json(DataResponse {
        data: AvailabilityResponse {
            room_id: room.id,
            start_date: range.start(),
            end_date: range.end(),
            available,
        },
    }))
}

// ---------------------------------------------------------------------------
// Admin endpoints
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/rooms
pub async fn create_room(
    session: AdminSession,
    State(state): State<AppState>,
    Json(input): Json<CreateRoom>,
) -> AppResult<impl IntoResponse> {
    let input = CreateRoom {
        name: strip_markup(&input.name),
        description: strip_markup(&input.description),
        philosophy: strip_markup_opt(input.philosophy.as_deref()),
        ..input
    };
    require_non_empty("name", &input.name)?;

    let room = RoomRepo::create(&state.pool, &input).await?;

    tracing::info!(room_id = room.id, name = %room.name, user_id = session.user_id, "Room created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: room })))
}

/// PUT /api/v1/admin/rooms/{id}
pub async fn update_room(
    session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRoom>,
) -> AppResult<impl IntoResponse> {
    let input = UpdateRoom {
        name: input.name.as_deref().map(strip_markup),
        description: input.description.as_deref().map(strip_markup),
        philosophy: strip_markup_opt(input.philosophy.as_deref()),
        ..input
    };

    let room = RoomRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Room", id }))?;

    tracing::info!(room_id = id, user_id = session.user_id, "Room updated");

    Ok(Json(DataResponse { data: room }))
}

/// DELETE /api/v1/admin/rooms/{id}
pub async fn delete_room(
    session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = RoomRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Room", id }));
    }

    tracing::info!(room_id = id, user_id = session.user_id, "Room deleted");

    Ok(StatusCode::NO_CONTENT)
}
