//! Route definitions for room pricing.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::pricing;
use crate::state::AppState;

/// Public pricing routes mounted at `/pricing`.
///
/// ```text
/// GET / -> list_pricing (optional ?room_id= filter)
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", get(pricing::list_pricing))
}

/// Admin pricing routes mounted at `/admin/pricing`.
///
/// ```text
/// POST   /      -> create_pricing
/// PUT    /{id}  -> update_pricing
/// DELETE /{id}  -> delete_pricing
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", post(pricing::create_pricing))
        .route("/{id}", put(pricing::update_pricing).delete(pricing::delete_pricing))
}
