//! Route definitions for the blog.

use axum::routing::get;
use axum::Router;

use crate::handlers::blog;
use crate::state::AppState;

/// Public blog routes mounted at `/blog`.
///
/// ```text
/// GET /        -> list_published_posts
/// GET /{slug}  -> get_published_post
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/", get(blog::list_published_posts))
        .route("/{slug}", get(blog::get_published_post))
}

/// Admin blog routes mounted at `/admin/blog`.
///
/// ```text
/// GET    /      -> list_posts (drafts included)
/// POST   /      -> create_post
/// GET    /{id}  -> get_post
/// PUT    /{id}  -> update_post
/// DELETE /{id}  -> delete_post
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(blog::list_posts).post(blog::create_post))
        .route(
            "/{id}",
            get(blog::get_post).put(blog::update_post).delete(blog::delete_post),
        )
}
