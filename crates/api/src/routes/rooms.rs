//! Route definitions for rooms and availability.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::rooms;
use crate::state::AppState;

/// Public room routes mounted at `/rooms`.
///
/// ```text
/// GET /                    -> list_rooms
/// GET /available           -> list_available_rooms
/// GET /{id}                -> get_room
/// GET /{id}/availability   -> check_room_availability
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/", get(rooms::list_rooms))
        .route("/available", get(rooms::list_available_rooms))
        .route("/{id}", get(rooms::get_room))
        .route("/{id}/availability", get(rooms::check_room_availability))
}

/// Admin room routes mounted at `/admin/rooms`.
///
/// ```text
/// POST   /      -> create_room
/// PUT    /{id}  -> update_room
/// DELETE /{id}  -> delete_room
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", post(rooms::create_room))
        .route("/{id}", put(rooms::update_room).delete(rooms::delete_room))
}
