//! Handlers for reservations: the public booking workflow and the admin
//! status management endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pawstay_core::availability::DateRange;
use pawstay_core::error::CoreError;
use pawstay_core::reservation::ReservationStatus;
use pawstay_core::sanitize::{strip_markup, strip_markup_opt};
use pawstay_core::schedule::STATUS_OCCUPIED;
use pawstay_core::types::DbId;
use pawstay_core::validate::{require_non_empty, validate_email};
use pawstay_db::models::reservation::{CreateReservation, Reservation, UpdateReservationStatus};
use pawstay_db::models::schedule::CreateSchedule;
use pawstay_db::repositories::{ReservationRepo, RoomRepo, ScheduleRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the admin reservation list.
#[derive(Debug, Deserialize)]
pub struct ListReservationsQuery {
    pub status: Option<String>,
}

// ---------------------------------------------------------------------------
// Public booking endpoint
// ---------------------------------------------------------------------------

/// POST /api/v1/reservations
///
/// Validate, persist, and announce a new booking request:
///
/// 1. required fields + email format
/// 2. end date strictly after start date
/// 3. preferred room (when given) must exist and have no occupied overlap
/// 4. all strings scrubbed of markup before persistence
/// 5. reservation stored with status `pending`
/// 6. room preference writes an `occupied` schedule entry
/// 7. confirmation + operator emails attempted best-effort
pub async fn create_reservation(
    State(state): State<AppState>,
    Json(input): Json<CreateReservation>,
) -> AppResult<impl IntoResponse> {
    let mut input = sanitize_input(input);

    require_non_empty("customer_name", &input.customer_name)?;
    require_non_empty("email", &input.email)?;
    validate_email(&input.email)?;

    if input.animal_count < 1 {
        return Err(AppError::Core(CoreError::Validation(
            "animal_count must be at least 1".into(),
        )));
    }

    let range = DateRange::new(input.start_date, input.end_date)?;

    // Availability check for the preferred room. Note: nothing locks
    // between this check and the insert below, so two concurrent requests
    // can both pass it (see DESIGN.md).
    if let Some(room_id) = input.room_id {
        let room = RoomRepo::find_by_id(&state.pool, room_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Room",
                id: room_id,
            }))?;

        if !ScheduleRepo::room_is_available(&state.pool, room.id, &range).await? {
            return Err(AppError::Core(CoreError::Validation(
                "The selected room is not available for these dates".into(),
            )));
        }
    }

    input.animal_count = input.animal_count.max(input.animals.len() as i32);
    let reservation = ReservationRepo::create(&state.pool, &input).await?;

    if let Some(room_id) = reservation.room_id {
        ScheduleRepo::create(
            &state.pool,
            &CreateSchedule {
                room_id,
                start_date: reservation.start_date,
                end_date: reservation.end_date,
                status: STATUS_OCCUPIED.to_string(),
                guest_info: Some(reservation.customer_name.clone()),
            },
        )
        .await?;
    }

    tracing::info!(
        reservation_id = reservation.id,
        room_id = reservation.room_id,
        start = %reservation.start_date,
        end = %reservation.end_date,
        "Reservation created",
    );

    send_reservation_emails(&state, &reservation).await;

    Ok((StatusCode::CREATED, Json(DataResponse { data: reservation })))
}

/// Scrub all free-text fields of a booking request.
fn sanitize_input(mut input: CreateReservation) -> CreateReservation {
    input.customer_name = strip_markup(&input.customer_name);
    input.email = strip_markup(&input.email);
    input.phone = strip_markup_opt(input.phone.as_deref());
    input.message = strip_markup_opt(input.message.as_deref());
    for animal in &mut input.animals {
        animal.name = strip_markup(&animal.name);
        animal.species = strip_markup(&animal.species);
        animal.sex = strip_markup_opt(animal.sex.as_deref());
        animal.comment = strip_markup_opt(animal.comment.as_deref());
        for service in &mut animal.services {
            *service = strip_markup(service);
        }
    }
    input
}

/// Attempt customer confirmation and operator notification emails.
///
/// Failures are logged and swallowed; they must never fail or roll back
/// the reservation itself.
async fn send_reservation_emails(state: &AppState, reservation: &Reservation) {
    let Some(mailer) = &state.mailer else {
        tracing::debug!("Email delivery not configured; skipping notifications");
        return;
    };

    let base_url = &state.config.site_base_url;

    if let Err(e) = mailer
        .send_reservation_confirmation(reservation, base_url)
        .await
    {
        tracing::warn!(
            reservation_id = reservation.id,
            error = %e,
            "Failed to send reservation confirmation email",
        );
    }

    if let Some(operator) = &state.config.operator_email {
        if let Err(e) = mailer
            .send_operator_notification(operator, reservation, base_url)
            .await
        {
            tracing::warn!(
                reservation_id = reservation.id,
                error = %e,
                "Failed to send operator notification email",
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Admin endpoints
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/reservations
///
/// List reservations, newest first, optionally filtered by status.
pub async fn list_reservations(
    _session: AdminSession,
    State(state): State<AppState>,
    Query(query): Query<ListReservationsQuery>,
) -> AppResult<impl IntoResponse> {
    // Reject unknown filter values instead of silently returning nothing.
    if let Some(status) = &query.status {
        ReservationStatus::parse(status)?;
    }

    let reservations = ReservationRepo::list(&state.pool, query.status.as_deref()).await?;
    Ok(Json(DataResponse { data: reservations }))
}

/// GET /api/v1/admin/reservations/{id}
pub async fn get_reservation(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let reservation = ReservationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Reservation",
            id,
        }))?;

    Ok(Json(DataResponse { data: reservation }))
}

/// PATCH /api/v1/admin/reservations/{id}/status
///
/// Move a reservation between `pending`, `confirmed`, and `cancelled`.
/// Any other value is rejected with 400 and the stored status is left
/// unchanged.
pub async fn update_reservation_status(
    session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateReservationStatus>,
) -> AppResult<impl IntoResponse> {
    let status = ReservationStatus::parse(&input.status)?;

    let reservation = ReservationRepo::update_status(&state.pool, id, status.as_str())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Reservation",
            id,
        }))?;

    tracing::info!(
        reservation_id = id,
        status = %status,
        user_id = session.user_id,
        "Reservation status updated",
    );

    Ok(Json(DataResponse { data: reservation }))
}
