//! Handlers for blog posts: public published listing, admin CRUD.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pawstay_core::error::CoreError;
use pawstay_core::sanitize::strip_markup;
use pawstay_core::types::DbId;
use pawstay_core::validate::require_non_empty;
use pawstay_db::models::blog::{CreateBlogPost, UpdateBlogPost};
use pawstay_db::repositories::BlogRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for blog listings.
#[derive(Debug, Deserialize)]
pub struct ListBlogQuery {
    pub language: Option<String>,
}

// ---------------------------------------------------------------------------
// Public endpoints
// ---------------------------------------------------------------------------

/// GET /api/v1/blog
///
/// Published posts only, newest first.
pub async fn list_published_posts(
    State(state): State<AppState>,
    Query(query): Query<ListBlogQuery>,
) -> AppResult<impl IntoResponse> {
    let posts = BlogRepo::list(&state.pool, true, query.language.as_deref()).await?;
    Ok(Json(DataResponse { data: posts }))
}

/// GET /api/v1/blog/{slug}
pub async fn get_published_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let post = BlogRepo::find_published_by_slug(&state.pool, &slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No published post with slug '{slug}'")))?;

    Ok(Json(DataResponse { data: post }))
}

// ---------------------------------------------------------------------------
// Admin endpoints
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/blog
///
/// All posts including drafts.
pub async fn list_posts(
    _session: AdminSession,
    State(state): State<AppState>,
    Query(query): Query<ListBlogQuery>,
) -> AppResult<impl IntoResponse> {
    let posts = BlogRepo::list(&state.pool, false, query.language.as_deref()).await?;
    Ok(Json(DataResponse { data: posts }))
}

/// GET /api/v1/admin/blog/{id}
pub async fn get_post(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let post = BlogRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BlogPost",
            id,
        }))?;

    Ok(Json(DataResponse { data: post }))
}

/// POST /api/v1/admin/blog
pub async fn create_post(
    session: AdminSession,
    State(state): State<AppState>,
    Json(input): Json<CreateBlogPost>,
) -> AppResult<impl IntoResponse> {
    // Post bodies keep their markup; titles and slugs do not.
    let input = CreateBlogPost {
        title: strip_markup(&input.title),
        slug: strip_markup(&input.slug),
        ..input
    };
    require_non_empty("title", &input.title)?;
    require_non_empty("slug", &input.slug)?;

    let post = BlogRepo::create(&state.pool, &input).await?;

    tracing::info!(
        post_id = post.id,
        slug = %post.slug,
        user_id = session.user_id,
        "Blog post created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: post })))
}

/// PUT /api/v1/admin/blog/{id}
pub async fn update_post(
    session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBlogPost>,
) -> AppResult<impl IntoResponse> {
    let input = UpdateBlogPost {
        title: input.title.as_deref().map(strip_markup),
        slug: input.slug.as_deref().map(strip_markup),
        ..input
    };

    let post = BlogRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BlogPost",
            id,
        }))?;

    tracing::info!(post_id = id, user_id = session.user_id, "Blog post updated");

    Ok(Json(DataResponse { data: post }))
}

/// DELETE /api/v1/admin/blog/{id}
pub async fn delete_post(
    session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = BlogRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "BlogPost",
            id,
        }));
    }

    tracing::info!(post_id = id, user_id = session.user_id, "Blog post deleted");

    Ok(StatusCode::NO_CONTENT)
}
