//! Route definitions for the admin schedule calendar.

use axum::routing::get;
use axum::Router;

use crate::handlers::schedules;
use crate::state::AppState;

/// Admin schedule routes mounted at `/admin/schedules`.
///
/// ```text
/// GET    /      -> list_schedules (optional ?room_id= filter)
/// POST   /      -> create_schedule
/// GET    /{id}  -> get_schedule
/// PUT    /{id}  -> update_schedule
/// DELETE /{id}  -> delete_schedule
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(schedules::list_schedules).post(schedules::create_schedule),
        )
        .route(
            "/{id}",
            get(schedules::get_schedule)
                .put(schedules::update_schedule)
                .delete(schedules::delete_schedule),
        )
}
