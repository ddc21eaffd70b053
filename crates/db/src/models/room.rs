//! Boarding room entity model and DTOs.

use pawstay_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A room row from the `rooms` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Room {
    pub id: DbId,
    pub name: String,
    pub description: String,
    /// Floor area in square metres, when known.
    pub surface_m2: Option<f64>,
    /// Gallery image URLs, stored as a JSONB array.
    pub images: Json<Vec<String>>,
    /// Free-text "philosophy" blurb shown on the room page.
    pub philosophy: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new room.
#[derive(Debug, Deserialize)]
pub struct CreateRoom {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub surface_m2: Option<f64>,
    #[serde(default)]
    pub images: Vec<String>,
    pub philosophy: Option<String>,
}

/// DTO for updating a room. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateRoom {
    pub name: Option<String>,
    pub description: Option<String>,
    pub surface_m2: Option<f64>,
    pub images: Option<Vec<String>>,
    pub philosophy: Option<String>,
}
