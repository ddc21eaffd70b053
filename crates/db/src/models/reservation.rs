//! Reservation entity model and DTOs.

use chrono::NaiveDate;
use pawstay_core::reservation::Animal;
use pawstay_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A reservation row from the `reservations` table.
///
/// Append-only from the public side: customers create them, the back
/// office moves `status` between `pending`, `confirmed`, and `cancelled`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reservation {
    pub id: DbId,
    pub customer_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Preferred room, if the customer picked one.
    pub room_id: Option<DbId>,
    pub animal_count: i32,
    /// Guest animal manifest, stored as a JSONB array.
    pub animals: Json<Vec<Animal>>,
    pub message: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a reservation (public booking form).
#[derive(Debug, Deserialize)]
pub struct CreateReservation {
    pub customer_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub room_id: Option<DbId>,
    #[serde(default = "default_animal_count")]
    pub animal_count: i32,
    #[serde(default)]
    pub animals: Vec<Animal>,
    pub message: Option<String>,
}

fn default_animal_count() -> i32 {
    1
}

/// DTO for the admin status update.
#[derive(Debug, Deserialize)]
pub struct UpdateReservationStatus {
    pub status: String,
}
