//! Route definitions for site settings.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// Public settings routes mounted at `/settings`.
///
/// ```text
/// GET /{key} -> get_setting
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/{key}", get(settings::get_setting))
}

/// Admin settings routes mounted at `/admin/settings`.
///
/// ```text
/// GET    /       -> list_settings
/// PUT    /       -> upsert_setting
/// DELETE /{key}  -> delete_setting
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(settings::list_settings).put(settings::upsert_setting))
        .route("/{key}", delete(settings::delete_setting))
}
