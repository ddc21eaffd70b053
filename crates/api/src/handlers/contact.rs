//! Handlers for contact messages: public submission, admin inbox.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pawstay_core::error::CoreError;
use pawstay_core::sanitize::strip_markup;
use pawstay_core::types::DbId;
use pawstay_core::validate::{require_non_empty, validate_email};
use pawstay_db::models::contact::{ContactMessage, CreateContactMessage};
use pawstay_db::repositories::ContactRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/contact
///
/// Public contact-form submission.
pub async fn create_contact_message(
    State(state): State<AppState>,
    Json(input): Json<CreateContactMessage>,
) -> AppResult<impl IntoResponse> {
    let input = CreateContactMessage {
        name: strip_markup(&input.name),
        email: strip_markup(&input.email),
        subject: strip_markup(&input.subject),
        body: strip_markup(&input.body),
    };
    require_non_empty("name", &input.name)?;
    require_non_empty("email", &input.email)?;
    require_non_empty("body", &input.body)?;
    validate_email(&input.email)?;

    let message = ContactRepo::create(&state.pool, &input).await?;

    tracing::info!(message_id = message.id, "Contact message received");

    notify_operator(&state, &message).await;

    Ok((StatusCode::CREATED, Json(DataResponse { data: message })))
}

/// Attempt the operator alert for a new contact message.
///
/// Failures are logged and swallowed; the submission is already stored.
async fn notify_operator(state: &AppState, message: &ContactMessage) {
    let (Some(mailer), Some(operator)) = (&state.mailer, &state.config.operator_email) else {
        return;
    };

    if let Err(e) = mailer
        .send_contact_notification(operator, message, &state.config.site_base_url)
        .await
    {
        tracing::warn!(
            message_id = message.id,
            error = %e,
            "Failed to send contact notification email",
        );
    }
}

/// GET /api/v1/admin/contact
pub async fn list_contact_messages(
    _session: AdminSession,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let messages = ContactRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: messages }))
}

/// GET /api/v1/admin/contact/{id}
pub async fn get_contact_message(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let message = ContactRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ContactMessage",
            id,
        }))?;

    Ok(Json(DataResponse { data: message }))
}

/// PATCH /api/v1/admin/contact/{id}/read
pub async fn mark_contact_message_read(
    session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let message = ContactRepo::mark_read(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ContactMessage",
            id,
        }))?;

    tracing::info!(message_id = id, user_id = session.user_id, "Contact message marked read");

    Ok(Json(DataResponse { data: message }))
}

/// DELETE /api/v1/admin/contact/{id}
pub async fn delete_contact_message(
    session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ContactRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "ContactMessage",
            id,
        }));
    }

    tracing::info!(message_id = id, user_id = session.user_id, "Contact message deleted");

    Ok(StatusCode::NO_CONTENT)
}
