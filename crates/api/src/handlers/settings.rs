//! Handlers for site settings: public read by key, admin upsert/delete.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pawstay_core::sanitize::strip_markup;
use pawstay_core::validate::require_non_empty;
use pawstay_db::models::setting::UpsertSetting;
use pawstay_db::repositories::SettingRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/settings/{key}
///
/// Public read of a single setting (opening hours, contact details).
pub async fn get_setting(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<impl IntoResponse> {
    let setting = SettingRepo::find_by_key(&state.pool, &key)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No setting with key '{key}'")))?;

    Ok(Json(DataResponse { data: setting }))
}

/// GET /api/v1/admin/settings
pub async fn list_settings(
    _session: AdminSession,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let settings = SettingRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: settings }))
}

/// PUT /api/v1/admin/settings
///
/// Insert or overwrite a setting by key.
pub async fn upsert_setting(
    session: AdminSession,
    State(state): State<AppState>,
    Json(input): Json<UpsertSetting>,
) -> AppResult<impl IntoResponse> {
    let input = UpsertSetting {
        key: strip_markup(&input.key),
        value: input.value,
    };
    require_non_empty("key", &input.key)?;

    let setting = SettingRepo::upsert(&state.pool, &input).await?;

    tracing::info!(key = %setting.key, user_id = session.user_id, "Setting upserted");

    Ok(Json(DataResponse { data: setting }))
}

/// DELETE /api/v1/admin/settings/{key}
pub async fn delete_setting(
    session: AdminSession,
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<impl IntoResponse> {
    let deleted = SettingRepo::delete(&state.pool, &key).await?;
    if !deleted {
        return Err(AppError::NotFound(format!("No setting with key '{key}'")));
    }

    tracing::info!(key = %key, user_id = session.user_id, "Setting deleted");

    Ok(StatusCode::NO_CONTENT)
}
