//! Repository for the `blog_posts` table.

use pawstay_core::types::DbId;
use sqlx::PgPool;

use crate::models::blog::{BlogPost, CreateBlogPost, UpdateBlogPost};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, slug, body, image_url, language, published, \
                        created_at, updated_at";

/// Provides CRUD operations for blog posts.
pub struct BlogRepo;

impl BlogRepo {
    /// Insert a new post, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateBlogPost) -> Result<BlogPost, sqlx::Error> {
        let query = format!(
            "INSERT INTO blog_posts (title, slug, body, image_url, language, published)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.body)
            .bind(&input.image_url)
            .bind(&input.language)
            .bind(input.published)
            .fetch_one(pool)
            .await
    }

    /// Find a post by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blog_posts WHERE id = $1");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a published post by slug (public blog page).
    pub async fn find_published_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<BlogPost>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM blog_posts WHERE slug = $1 AND published = true");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List posts, newest first.
    ///
    /// `published_only` restricts to published posts (the public listing);
    /// `language` filters when given.
    pub async fn list(
        pool: &PgPool,
        published_only: bool,
        language: Option<&str>,
    ) -> Result<Vec<BlogPost>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM blog_posts
             WHERE (NOT $1 OR published = true)
               AND ($2::text IS NULL OR language = $2)
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(published_only)
            .bind(language)
            .fetch_all(pool)
            .await
    }

    /// Update a post. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBlogPost,
    ) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!(
            "UPDATE blog_posts SET
                title = COALESCE($2, title),
                slug = COALESCE($3, slug),
                body = COALESCE($4, body),
                image_url = COALESCE($5, image_url),
                language = COALESCE($6, language),
                published = COALESCE($7, published)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.body)
            .bind(&input.image_url)
            .bind(&input.language)
            .bind(input.published)
            .fetch_optional(pool)
            .await
    }

    /// Delete a post. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
