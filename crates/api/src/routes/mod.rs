pub mod auth;
pub mod blog;
pub mod contact;
pub mod custom_messages;
pub mod faq;
pub mod health;
pub mod pricing;
pub mod reservations;
pub mod rooms;
pub mod schedules;
pub mod settings;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                          login (public)
/// /auth/logout                         logout (requires session)
/// /auth/me                             authenticated identity
///
/// /rooms                               public room catalogue
/// /rooms/available                     rooms free for a date range
/// /rooms/{id}                          single room
/// /rooms/{id}/availability             per-room availability check
///
/// /reservations                        public booking submission (POST)
///
/// /pricing                             public price tables
/// /blog                                published posts
/// /blog/{slug}                         single published post
/// /faq                                 FAQ entries
/// /contact                             public contact form (POST)
/// /custom-messages                     editable content blocks
/// /settings/{key}                      public setting lookup
///
/// /admin/rooms                         create (POST)
/// /admin/rooms/{id}                    update, delete
///
/// /admin/schedules                     list, create
/// /admin/schedules/{id}                get, update, delete
///
/// /admin/reservations                  list (optional ?status=)
/// /admin/reservations/{id}             get
/// /admin/reservations/{id}/status      status transition (PATCH)
///
/// /admin/pricing                       create (POST)
/// /admin/pricing/{id}                  update, delete
///
/// /admin/blog                          list incl. drafts, create
/// /admin/blog/{id}                     get, update, delete
///
/// /admin/faq                           create (POST)
/// /admin/faq/{id}                      update, delete
///
/// /admin/contact                       inbox list
/// /admin/contact/{id}                  get, delete
/// /admin/contact/{id}/read             mark read (PATCH)
///
/// /admin/custom-messages               create (POST)
/// /admin/custom-messages/{id}          update, delete
///
/// /admin/settings                      list, upsert (PUT)
/// /admin/settings/{key}                delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication (login, logout, me).
        .nest("/auth", auth::router())
        // Public catalogue and booking surface.
        .nest("/rooms", rooms::public_router())
        .nest("/reservations", reservations::public_router())
        .nest("/pricing", pricing::public_router())
        .nest("/blog", blog::public_router())
        .nest("/faq", faq::public_router())
        .nest("/contact", contact::public_router())
        .nest("/custom-messages", custom_messages::public_router())
        .nest("/settings", settings::public_router())
        // Back office. Every handler behind /admin requires a session.
        .nest("/admin/rooms", rooms::admin_router())
        .nest("/admin/schedules", schedules::admin_router())
        .nest("/admin/reservations", reservations::admin_router())
        .nest("/admin/pricing", pricing::admin_router())
        .nest("/admin/blog", blog::admin_router())
        .nest("/admin/faq", faq::admin_router())
        .nest("/admin/contact", contact::admin_router())
        .nest("/admin/custom-messages", custom_messages::admin_router())
        .nest("/admin/settings", settings::admin_router())
}
