//! Route definitions for editable content blocks.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::custom_messages;
use crate::state::AppState;

/// Public content-block routes mounted at `/custom-messages`.
///
/// ```text
/// GET / -> list_custom_messages (optional ?language= filter)
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", get(custom_messages::list_custom_messages))
}

/// Admin content-block routes mounted at `/admin/custom-messages`.
///
/// ```text
/// POST   /      -> create_custom_message
/// PUT    /{id}  -> update_custom_message
/// DELETE /{id}  -> delete_custom_message
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", post(custom_messages::create_custom_message))
        .route(
            "/{id}",
            put(custom_messages::update_custom_message)
                .delete(custom_messages::delete_custom_message),
        )
}
