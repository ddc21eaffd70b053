//! Handlers for FAQ entries: public listing, admin CRUD.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pawstay_core::error::CoreError;
use pawstay_core::sanitize::{strip_markup, strip_markup_opt};
use pawstay_core::types::DbId;
use pawstay_core::validate::require_non_empty;
use pawstay_db::models::faq::{CreateFaqItem, UpdateFaqItem};
use pawstay_db::repositories::FaqRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the FAQ list.
#[derive(Debug, Deserialize)]
pub struct ListFaqQuery {
    pub language: Option<String>,
    pub category: Option<String>,
}

/// GET /api/v1/faq
pub async fn list_faq(
    State(state): State<AppState>,
    Query(query): Query<ListFaqQuery>,
) -> AppResult<impl IntoResponse> {
    let items =
        FaqRepo::list(&state.pool, query.language.as_deref(), query.category.as_deref()).await?;
    Ok(Json(DataResponse { data: items }))
}

/// POST /api/v1/admin/faq
pub async fn create_faq(
    session: AdminSession,
    State(state): State<AppState>,
    Json(input): Json<CreateFaqItem>,
) -> AppResult<impl IntoResponse> {
    let input = CreateFaqItem {
        question: strip_markup(&input.question),
        answer: strip_markup(&input.answer),
        category: strip_markup_opt(input.category.as_deref()),
        ..input
    };
    require_non_empty("question", &input.question)?;
    require_non_empty("answer", &input.answer)?;

    let item = FaqRepo::create(&state.pool, &input).await?;

    tracing::info!(faq_id = item.id, user_id = session.user_id, "FAQ entry created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// PUT /api/v1/admin/faq/{id}
pub async fn update_faq(
    session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFaqItem>,
) -> AppResult<impl IntoResponse> {
    let input = UpdateFaqItem {
        question: input.question.as_deref().map(strip_markup),
        answer: input.answer.as_deref().map(strip_markup),
        category: strip_markup_opt(input.category.as_deref()),
        ..input
    };

    let item = FaqRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "FaqItem",
            id,
        }))?;

    tracing::info!(faq_id = id, user_id = session.user_id, "FAQ entry updated");

    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/v1/admin/faq/{id}
pub async fn delete_faq(
    session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = FaqRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "FaqItem",
            id,
        }));
    }

    tracing::info!(faq_id = id, user_id = session.user_id, "FAQ entry deleted");

    Ok(StatusCode::NO_CONTENT)
}
