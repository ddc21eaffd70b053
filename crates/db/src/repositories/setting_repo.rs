//! Repository for the `site_settings` table.

use sqlx::PgPool;

use crate::models::setting::{SiteSetting, UpsertSetting};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, key, value, created_at, updated_at";

/// Provides key/value storage for site configuration editable from the
/// back office.
pub struct SettingRepo;

impl SettingRepo {
    /// Insert or update a setting by key, returning the row.
    pub async fn upsert(
        pool: &PgPool,
        input: &UpsertSetting,
    ) -> Result<SiteSetting, sqlx::Error> {
        let query = format!(
            "INSERT INTO site_settings (key, value)
             VALUES ($1, $2)
             ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteSetting>(&query)
            .bind(&input.key)
            .bind(&input.value)
            .fetch_one(pool)
            .await
    }

    /// Find a setting by key.
    pub async fn find_by_key(
        pool: &PgPool,
        key: &str,
    ) -> Result<Option<SiteSetting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_settings WHERE key = $1");
        sqlx::query_as::<_, SiteSetting>(&query)
            .bind(key)
            .fetch_optional(pool)
            .await
    }

    /// List all settings ordered by key.
    pub async fn list(pool: &PgPool) -> Result<Vec<SiteSetting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_settings ORDER BY key");
        sqlx::query_as::<_, SiteSetting>(&query)
            .fetch_all(pool)
            .await
    }

    /// Delete a setting by key. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, key: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM site_settings WHERE key = $1")
            .bind(key)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
