//! Custom content block model and DTOs.

use pawstay_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A free-form content block row from the `custom_messages` table
/// (site banners, notices, editable page fragments).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CustomMessage {
    pub id: DbId,
    /// Stable lookup key used by the frontend (e.g. `home_banner`).
    pub key: String,
    pub content: String,
    pub language: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a content block.
#[derive(Debug, Deserialize)]
pub struct CreateCustomMessage {
    pub key: String,
    pub content: String,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".to_string()
}

/// DTO for updating a content block. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateCustomMessage {
    pub content: Option<String>,
    pub language: Option<String>,
}
