//! Blog post model and DTOs.

use pawstay_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A blog post row from the `blog_posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogPost {
    pub id: DbId,
    pub title: String,
    /// URL slug, unique across all posts.
    pub slug: String,
    pub body: String,
    pub image_url: Option<String>,
    pub language: String,
    pub published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a blog post.
#[derive(Debug, Deserialize)]
pub struct CreateBlogPost {
    pub title: String,
    pub slug: String,
    pub body: String,
    pub image_url: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub published: bool,
}

fn default_language() -> String {
    "en".to_string()
}

/// DTO for updating a blog post. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateBlogPost {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub body: Option<String>,
    pub image_url: Option<String>,
    pub language: Option<String>,
    pub published: Option<bool>,
}
