//! Route definitions for reservations.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::reservations;
use crate::state::AppState;

/// Public booking routes mounted at `/reservations`.
///
/// ```text
/// POST / -> create_reservation
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", post(reservations::create_reservation))
}

/// Admin reservation routes mounted at `/admin/reservations`.
///
/// ```text
/// GET   /              -> list_reservations (optional ?status= filter)
/// GET   /{id}          -> get_reservation
/// PATCH /{id}/status   -> update_reservation_status
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(reservations::list_reservations))
        .route("/{id}", get(reservations::get_reservation))
        .route("/{id}/status", patch(reservations::update_reservation_status))
}
