//! Repository for the `faq_items` table.

use pawstay_core::types::DbId;
use sqlx::PgPool;

use crate::models::faq::{CreateFaqItem, FaqItem, UpdateFaqItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, question, answer, category, language, position, created_at, updated_at";

/// Provides CRUD operations for FAQ entries.
pub struct FaqRepo;

impl FaqRepo {
    /// Insert a new FAQ entry, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateFaqItem) -> Result<FaqItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO faq_items (question, answer, category, language, position)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FaqItem>(&query)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(&input.category)
            .bind(&input.language)
            .bind(input.position)
            .fetch_one(pool)
            .await
    }

    /// Find a FAQ entry by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<FaqItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM faq_items WHERE id = $1");
        sqlx::query_as::<_, FaqItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List FAQ entries in display order, filterable by language/category.
    pub async fn list(
        pool: &PgPool,
        language: Option<&str>,
        category: Option<&str>,
    ) -> Result<Vec<FaqItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM faq_items
             WHERE ($1::text IS NULL OR language = $1)
               AND ($2::text IS NULL OR category = $2)
             ORDER BY position, id"
        );
        sqlx::query_as::<_, FaqItem>(&query)
            .bind(language)
            .bind(category)
            .fetch_all(pool)
            .await
    }

    /// Update a FAQ entry. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFaqItem,
    ) -> Result<Option<FaqItem>, sqlx::Error> {
        let query = format!(
            "UPDATE faq_items SET
                question = COALESCE($2, question),
                answer = COALESCE($3, answer),
                category = COALESCE($4, category),
                language = COALESCE($5, language),
                position = COALESCE($6, position)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FaqItem>(&query)
            .bind(id)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(&input.category)
            .bind(&input.language)
            .bind(input.position)
            .fetch_optional(pool)
            .await
    }

    /// Delete a FAQ entry. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM faq_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
