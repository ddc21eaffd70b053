//! FAQ item model and DTOs.

use pawstay_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A FAQ entry row from the `faq_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FaqItem {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    pub category: Option<String>,
    pub language: String,
    pub position: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a FAQ entry.
#[derive(Debug, Deserialize)]
pub struct CreateFaqItem {
    pub question: String,
    pub answer: String,
    pub category: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub position: i32,
}

fn default_language() -> String {
    "en".to_string()
}

/// DTO for updating a FAQ entry. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateFaqItem {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<String>,
    pub language: Option<String>,
    pub position: Option<i32>,
}
