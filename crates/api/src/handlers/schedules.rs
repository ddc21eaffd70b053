//! Handlers for the admin room-schedule calendar.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pawstay_core::availability::DateRange;
use pawstay_core::error::CoreError;
use pawstay_core::sanitize::strip_markup_opt;
use pawstay_core::schedule::ScheduleStatus;
use pawstay_core::types::DbId;
use pawstay_db::models::schedule::{CreateSchedule, UpdateSchedule};
use pawstay_db::repositories::{RoomRepo, ScheduleRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the schedule list.
#[derive(Debug, Deserialize)]
pub struct ListSchedulesQuery {
    pub room_id: Option<DbId>,
}

/// GET /api/v1/admin/schedules
pub async fn list_schedules(
    _session: AdminSession,
    State(state): State<AppState>,
    Query(query): Query<ListSchedulesQuery>,
) -> AppResult<impl IntoResponse> {
    let entries = ScheduleRepo::list(&state.pool, query.room_id).await?;
    Ok(Json(DataResponse { data: entries }))
}

/// GET /api/v1/admin/schedules/{id}
pub async fn get_schedule(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let entry = ScheduleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "RoomSchedule",
            id,
        }))?;

    Ok(Json(DataResponse { data: entry }))
}

/// POST /api/v1/admin/schedules
///
/// Manually block or free a room for a date range.
pub async fn create_schedule(
    session: AdminSession,
    State(state): State<AppState>,
    Json(input): Json<CreateSchedule>,
) -> AppResult<impl IntoResponse> {
    ScheduleStatus::parse(&input.status)?;
    DateRange::new(input.start_date, input.end_date)?;

    let room_id = input.room_id;
    RoomRepo::find_by_id(&state.pool, room_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Room",
            id: room_id,
        }))?;

    let input = CreateSchedule {
        guest_info: strip_markup_opt(input.guest_info.as_deref()),
        ..input
    };
    let entry = ScheduleRepo::create(&state.pool, &input).await?;

    tracing::info!(
        schedule_id = entry.id,
        room_id = entry.room_id,
        status = %entry.status,
        user_id = session.user_id,
        "Schedule entry created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: entry })))
}

/// PUT /api/v1/admin/schedules/{id}
pub async fn update_schedule(
    session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSchedule>,
) -> AppResult<impl IntoResponse> {
    if let Some(status) = &input.status {
        ScheduleStatus::parse(status)?;
    }

    // Validate the dates as they will be after the partial update, so a
    // one-sided change cannot invert an existing range.
    if input.start_date.is_some() || input.end_date.is_some() {
        let existing = ScheduleRepo::find_by_id(&state.pool, id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "RoomSchedule",
                id,
            }))?;
        DateRange::new(
            input.start_date.unwrap_or(existing.start_date),
            input.end_date.unwrap_or(existing.end_date),
        )?;
    }

    let input = UpdateSchedule {
        guest_info: strip_markup_opt(input.guest_info.as_deref()),
        ..input
    };

    let entry = ScheduleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "RoomSchedule",
            id,
        }))?;

    tracing::info!(schedule_id = id, user_id = session.user_id, "Schedule entry updated");

    Ok(Json(DataResponse { data: entry }))
}

/// DELETE /api/v1/admin/schedules/{id}
pub async fn delete_schedule(
    session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ScheduleRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "RoomSchedule",
            id,
        }));
    }

    tracing::info!(schedule_id = id, user_id = session.user_id, "Schedule entry deleted");

    Ok(StatusCode::NO_CONTENT)
}
