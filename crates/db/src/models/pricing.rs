//! Room pricing line model and DTOs.

use pawstay_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A pricing line row from the `room_pricing` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RoomPricing {
    pub id: DbId,
    pub room_id: DbId,
    /// Display label, e.g. "One dog" or "Second cat".
    pub label: String,
    pub price_cents: i64,
    /// Billing period the price applies to (e.g. `night`).
    pub period: String,
    /// Sort order within the room's price table.
    pub position: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a pricing line.
#[derive(Debug, Deserialize)]
pub struct CreatePricing {
    pub room_id: DbId,
    pub label: String,
    pub price_cents: i64,
    #[serde(default = "default_period")]
    pub period: String,
    #[serde(default)]
    pub position: i32,
}

fn default_period() -> String {
    "night".to_string()
}

/// DTO for updating a pricing line. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdatePricing {
    pub label: Option<String>,
    pub price_cents: Option<i64>,
    pub period: Option<String>,
    pub position: Option<i32>,
}
