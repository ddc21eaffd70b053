//! Handlers for editable content blocks: public read, admin CRUD.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pawstay_core::error::CoreError;
use pawstay_core::sanitize::strip_markup;
use pawstay_core::types::DbId;
use pawstay_core::validate::require_non_empty;
use pawstay_db::models::custom_message::{CreateCustomMessage, UpdateCustomMessage};
use pawstay_db::repositories::CustomMessageRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the content-block list.
#[derive(Debug, Deserialize)]
pub struct ListCustomMessagesQuery {
    pub language: Option<String>,
}

/// GET /api/v1/custom-messages
///
/// Public read used by the frontend to render banners and notices.
pub async fn list_custom_messages(
    State(state): State<AppState>,
    Query(query): Query<ListCustomMessagesQuery>,
) -> AppResult<impl IntoResponse> {
    let blocks = CustomMessageRepo::list(&state.pool, query.language.as_deref()).await?;
    Ok(Json(DataResponse { data: blocks }))
}

/// POST /api/v1/admin/custom-messages
pub async fn create_custom_message(
    session: AdminSession,
    State(state): State<AppState>,
    Json(input): Json<CreateCustomMessage>,
) -> AppResult<impl IntoResponse> {
    // Content blocks carry markup on purpose; only the key is scrubbed.
    let input = CreateCustomMessage {
        key: strip_markup(&input.key),
        ..input
    };
    require_non_empty("key", &input.key)?;
    require_non_empty("content", &input.content)?;

    let block = CustomMessageRepo::create(&state.pool, &input).await?;

    tracing::info!(
        block_id = block.id,
        key = %block.key,
        user_id = session.user_id,
        "Content block created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: block })))
}

/// PUT /api/v1/admin/custom-messages/{id}
pub async fn update_custom_message(
    session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCustomMessage>,
) -> AppResult<impl IntoResponse> {
    let block = CustomMessageRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CustomMessage",
            id,
        }))?;

    tracing::info!(block_id = id, user_id = session.user_id, "Content block updated");

    Ok(Json(DataResponse { data: block }))
}

/// DELETE /api/v1/admin/custom-messages/{id}
pub async fn delete_custom_message(
    session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = CustomMessageRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "CustomMessage",
            id,
        }));
    }

    tracing::info!(block_id = id, user_id = session.user_id, "Content block deleted");

    Ok(StatusCode::NO_CONTENT)
}
