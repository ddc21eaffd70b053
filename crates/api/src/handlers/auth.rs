//! Handlers for the `/auth` resource (login, logout, me).

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use pawstay_core::error::CoreError;
use pawstay_core::types::Timestamp;
use pawstay_db::models::session::CreateSession;
use pawstay_db::models::user::UserResponse;
use pawstay_db::repositories::{SessionRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::auth::password::verify_password;
use crate::auth::session::{generate_csrf_token, generate_session_token, SESSION_COOKIE};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Opaque session token; also set as an HttpOnly cookie.
    pub token: String,
    /// CSRF token paired with the session for cookie-based clients.
    pub csrf_token: String,
    pub expires_at: Timestamp,
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Authenticate with username + password and establish a server-side
/// session. Unknown usernames and wrong passwords produce the identical
/// generic 401 so the endpoint cannot be used to enumerate accounts.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let invalid_credentials =
        || AppError::Core(CoreError::Unauthorized("Invalid username or password".into()));

    // 1. Find user by username.
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(invalid_credentials)?;

    // 2. Verify password.
    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(invalid_credentials());
    }

    // 3. Only after the credentials check out, reject deactivated accounts.
    // Checking earlier would let anyone confirm a deactivated username
    // exists without knowing its password.
    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    // 4. On success: stamp last_login_at and create the session.
    UserRepo::record_successful_login(&state.pool, user.id).await?;

    // Opportunistic cleanup keeps the session table from accumulating
    // expired and revoked rows; there is no background task for it.
    let removed = SessionRepo::cleanup_expired(&state.pool).await?;
    if removed > 0 {
        tracing::debug!(removed, "Pruned stale sessions");
    }

    let (token, token_hash) = generate_session_token();
    let csrf_token = generate_csrf_token();
    let expires_at = Utc::now() + chrono::Duration::hours(state.config.session_expiry_hours);

    SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id: user.id,
            token_hash,
            csrf_token: csrf_token.clone(),
            expires_at,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, username = %user.username, "Admin logged in");

    let cookie = format!(
        "{SESSION_COOKIE}={token}; HttpOnly; SameSite=Lax; Path=/; Max-Age={}",
        state.config.session_expiry_hours * 3600
    );

    let body = LoginResponse {
        token,
        csrf_token,
        expires_at,
        user: UserResponse::from(&user),
    };

    Ok(([(SET_COOKIE, cookie)], Json(body)))
}

/// POST /api/v1/auth/logout
///
/// Revoke the presented session and clear the cookie. Returns 204.
pub async fn logout(
    session: AdminSession,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    SessionRepo::revoke_by_token_hash(&state.pool, &session.token_hash).await?;

    tracing::info!(user_id = session.user_id, "Admin logged out");

    let cookie = format!("{SESSION_COOKIE}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0");
    Ok((StatusCode::NO_CONTENT, [(SET_COOKIE, cookie)]))
}

/// GET /api/v1/auth/me
///
/// Identity of the authenticated admin.
pub async fn me(session: AdminSession, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: session.user_id,
        }))?;

    Ok(Json(UserResponse::from(&user)))
}
