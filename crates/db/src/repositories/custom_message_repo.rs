//! Repository for the `custom_messages` table.

use pawstay_core::types::DbId;
use sqlx::PgPool;

use crate::models::custom_message::{CreateCustomMessage, CustomMessage, UpdateCustomMessage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, key, content, language, created_at, updated_at";

/// Provides CRUD operations for free-form content blocks.
pub struct CustomMessageRepo;

impl CustomMessageRepo {
    /// Insert a new content block, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCustomMessage,
    ) -> Result<CustomMessage, sqlx::Error> {
        let query = format!(
            "INSERT INTO custom_messages (key, content, language)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CustomMessage>(&query)
            .bind(&input.key)
            .bind(&input.content)
            .bind(&input.language)
            .fetch_one(pool)
            .await
    }

    /// Find a content block by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CustomMessage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM custom_messages WHERE id = $1");
        sqlx::query_as::<_, CustomMessage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List content blocks, filterable by language.
    pub async fn list(
        pool: &PgPool,
        language: Option<&str>,
    ) -> Result<Vec<CustomMessage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM custom_messages
             WHERE ($1::text IS NULL OR language = $1)
             ORDER BY key"
        );
        sqlx::query_as::<_, CustomMessage>(&query)
            .bind(language)
            .fetch_all(pool)
            .await
    }

    /// Update a content block. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCustomMessage,
    ) -> Result<Option<CustomMessage>, sqlx::Error> {
        let query = format!(
            "UPDATE custom_messages SET
                content = COALESCE($2, content),
                language = COALESCE($3, language)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CustomMessage>(&query)
            .bind(id)
            .bind(&input.content)
            .bind(&input.language)
            .fetch_optional(pool)
            .await
    }

    /// Delete a content block. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM custom_messages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
