//! Site setting model and DTOs.

use pawstay_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A key/value setting row from the `site_settings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SiteSetting {
    pub id: DbId,
    pub key: String,
    pub value: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for upserting a setting.
#[derive(Debug, Deserialize)]
pub struct UpsertSetting {
    pub key: String,
    pub value: String,
}
