//! Route definitions for contact messages.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Public contact-form route mounted at `/contact`.
///
/// ```text
/// POST / -> create_contact_message
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", post(contact::create_contact_message))
}

/// Admin inbox routes mounted at `/admin/contact`.
///
/// ```text
/// GET    /            -> list_contact_messages
/// GET    /{id}        -> get_contact_message
/// PATCH  /{id}/read   -> mark_contact_message_read
/// DELETE /{id}        -> delete_contact_message
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(contact::list_contact_messages))
        .route(
            "/{id}",
            get(contact::get_contact_message).delete(contact::delete_contact_message),
        )
        .route("/{id}/read", patch(contact::mark_contact_message_read))
}
