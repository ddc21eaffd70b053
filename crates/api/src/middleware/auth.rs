//! Session-based authentication extractor for Axum handlers.
//!
//! Admin routes take [`AdminSession`] as a parameter; the request is
//! rejected with 401 before the handler runs unless it presents a live
//! session, either via the `pawstay_session` cookie or an
//! `Authorization: Bearer <token>` header.

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use pawstay_core::error::CoreError;
use pawstay_core::types::DbId;
use pawstay_db::repositories::{SessionRepo, UserRepo};

use crate::auth::session::{hash_session_token, SESSION_COOKIE};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated admin extracted from a session token.
///
/// ```ignore
/// async fn admin_only(session: AdminSession) -> AppResult<Json<()>> {
///     tracing::info!(user_id = session.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AdminSession {
    /// The admin user's internal database id.
    pub user_id: DbId,
    pub username: String,
    pub email: String,
    /// Hash of the presented token, used by logout to revoke exactly this
    /// session.
    pub token_hash: String,
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_token(parts).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Authentication required".into()))
        })?;

        let token_hash = hash_session_token(&token);

        let session = SessionRepo::find_active_by_token_hash(&state.pool, &token_hash)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Invalid or expired session".into()))
            })?;

        let user = UserRepo::find_by_id(&state.pool, session.user_id)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Invalid or expired session".into()))
            })?;

        if !user.is_active {
            return Err(AppError::Core(CoreError::Forbidden(
                "Account is deactivated".into(),
            )));
        }

        Ok(AdminSession {
            user_id: user.id,
            username: user.username,
            email: user.email,
            token_hash,
        })
    }
}

/// Pull the session token from the bearer header or the session cookie.
fn extract_token(parts: &Parts) -> Option<String> {
    if let Some(header) = parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
    {
        if let Some(token) = header.strip_prefix("Bearer ") {
            return Some(token.to_string());
        }
    }

    parts
        .headers
        .get(COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(cookie_session_value)
}

/// Find the session cookie in a `Cookie:` header value.
fn cookie_session_value(header: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}
