//! Route definitions for the FAQ.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::faq;
use crate::state::AppState;

/// Public FAQ routes mounted at `/faq`.
///
/// ```text
/// GET / -> list_faq (optional ?language= and ?category= filters)
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", get(faq::list_faq))
}

/// Admin FAQ routes mounted at `/admin/faq`.
///
/// ```text
/// POST   /      -> create_faq
/// PUT    /{id}  -> update_faq
/// DELETE /{id}  -> delete_faq
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", post(faq::create_faq))
        .route("/{id}", put(faq::update_faq).delete(faq::delete_faq))
}
