//! Room schedule entry model and DTOs.

use chrono::NaiveDate;
use pawstay_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A schedule entry row from the `room_schedules` table.
///
/// Marks a room as occupied, available, or under maintenance for a date
/// range. Only `occupied` entries block bookings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RoomSchedule {
    pub id: DbId,
    pub room_id: DbId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
    pub guest_info: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a schedule entry.
#[derive(Debug, Deserialize)]
pub struct CreateSchedule {
    pub room_id: DbId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
    pub guest_info: Option<String>,
}

/// DTO for updating a schedule entry. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateSchedule {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub guest_info: Option<String>,
}
