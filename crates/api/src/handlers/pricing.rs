//! Handlers for room pricing lines: public read, admin CRUD.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pawstay_core::error::CoreError;
use pawstay_core::sanitize::strip_markup;
use pawstay_core::types::DbId;
use pawstay_core::validate::require_non_empty;
use pawstay_db::models::pricing::{CreatePricing, UpdatePricing};
use pawstay_db::repositories::{PricingRepo, RoomRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the pricing list.
#[derive(Debug, Deserialize)]
pub struct ListPricingQuery {
    pub room_id: Option<DbId>,
}

/// GET /api/v1/pricing
pub async fn list_pricing(
    State(state): State<AppState>,
    Query(query): Query<ListPricingQuery>,
) -> AppResult<impl IntoResponse> {
    let lines = PricingRepo::list(&state.pool, query.room_id).await?;
    Ok(Json(DataResponse { data: lines }))
}

/// POST /api/v1/admin/pricing
pub async fn create_pricing(
    session: AdminSession,
    State(state): State<AppState>,
    Json(input): Json<CreatePricing>,
) -> AppResult<impl IntoResponse> {
    let input = CreatePricing {
        label: strip_markup(&input.label),
        period: strip_markup(&input.period),
        ..input
    };
    require_non_empty("label", &input.label)?;

    if input.price_cents < 0 {
        return Err(AppError::Core(CoreError::Validation(
            "price_cents must not be negative".into(),
        )));
    }

    let room_id = input.room_id;
    RoomRepo::find_by_id(&state.pool, room_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Room",
            id: room_id,
        }))?;

    let line = PricingRepo::create(&state.pool, &input).await?;

    tracing::info!(
        pricing_id = line.id,
        room_id = line.room_id,
        user_id = session.user_id,
        "Pricing line created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: line })))
}

/// PUT /api/v1/admin/pricing/{id}
pub async fn update_pricing(
    session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePricing>,
) -> AppResult<impl IntoResponse> {
    if let Some(price) = input.price_cents {
        if price < 0 {
            return Err(AppError::Core(CoreError::Validation(
                "price_cents must not be negative".into(),
            )));
        }
    }

    let input = UpdatePricing {
        label: input.label.as_deref().map(strip_markup),
        period: input.period.as_deref().map(strip_markup),
        ..input
    };

    let line = PricingRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "RoomPricing",
            id,
        }))?;

    tracing::info!(pricing_id = id, user_id = session.user_id, "Pricing line updated");

    Ok(Json(DataResponse { data: line }))
}

/// DELETE /api/v1/admin/pricing/{id}
pub async fn delete_pricing(
    session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = PricingRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "RoomPricing",
            id,
        }));
    }

    tracing::info!(pricing_id = id, user_id = session.user_id, "Pricing line deleted");

    Ok(StatusCode::NO_CONTENT)
}
