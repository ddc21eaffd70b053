//! Repository for the `room_schedules` table, including the SQL side of
//! the availability check.

use chrono::NaiveDate;
use pawstay_core::availability::DateRange;
use pawstay_core::schedule::STATUS_OCCUPIED;
use pawstay_core::types::DbId;
use sqlx::PgPool;

use crate::models::room::Room;
use crate::models::schedule::{CreateSchedule, RoomSchedule, UpdateSchedule};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, room_id, start_date, end_date, status, guest_info, \
                        created_at, updated_at";

/// Provides CRUD operations and availability scans for schedule entries.
pub struct ScheduleRepo;

impl ScheduleRepo {
    /// Insert a new schedule entry, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSchedule,
    ) -> Result<RoomSchedule, sqlx::Error> {
        let query = format!(
            "INSERT INTO room_schedules (room_id, start_date, end_date, status, guest_info)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RoomSchedule>(&query)
            .bind(input.room_id)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.status)
            .bind(&input.guest_info)
            .fetch_one(pool)
            .await
    }

    /// Find a schedule entry by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<RoomSchedule>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM room_schedules WHERE id = $1");
        sqlx::query_as::<_, RoomSchedule>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List schedule entries, optionally scoped to one room.
    pub async fn list(
        pool: &PgPool,
        room_id: Option<DbId>,
    ) -> Result<Vec<RoomSchedule>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM room_schedules
             WHERE ($1::bigint IS NULL OR room_id = $1)
             ORDER BY start_date"
        );
        sqlx::query_as::<_, RoomSchedule>(&query)
            .bind(room_id)
            .fetch_all(pool)
            .await
    }

    /// Occupied entries for a room that overlap the candidate range.
    ///
    /// Same inclusive comparison as [`DateRange::overlaps`]: an entry
    /// ending on the candidate's start date still blocks the booking.
    pub async fn find_occupied_overlapping(
        pool: &PgPool,
        room_id: DbId,
        range: &DateRange,
    ) -> Result<Vec<RoomSchedule>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM room_schedules
             WHERE room_id = $1
               AND status = $2
               AND start_date <= $4
               AND end_date >= $3
             ORDER BY start_date"
        );
        sqlx::query_as::<_, RoomSchedule>(&query)
            .bind(room_id)
            .bind(STATUS_OCCUPIED)
            .bind(range.start())
            .bind(range.end())
            .fetch_all(pool)
            .await
    }

    /// Whether a room has no occupied entry overlapping the range.
    pub async fn room_is_available(
        pool: &PgPool,
        room_id: DbId,
        range: &DateRange,
    ) -> Result<bool, sqlx::Error> {
        let overlapping = Self::find_occupied_overlapping(pool, room_id, range).await?;
        Ok(overlapping.is_empty())
    }

    /// All rooms with no occupied overlap for the range (the "list all
    /// available rooms" variant of the availability check).
    pub async fn list_available_rooms(
        pool: &PgPool,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Room>, sqlx::Error> {
        sqlx::query_as::<_, Room>(
            "SELECT r.id, r.name, r.description, r.surface_m2, r.images, r.philosophy,
                    r.created_at, r.updated_at
             FROM rooms r
             WHERE NOT EXISTS (
                 SELECT 1 FROM room_schedules s
                 WHERE s.room_id = r.id
                   AND s.status = $3
                   AND s.start_date <= $2
                   AND s.end_date >= $1
             )
             ORDER BY r.name",
        )
        .bind(start)
        .bind(end)
        .bind(STATUS_OCCUPIED)
        .fetch_all(pool)
        .await
    }

    /// Update a schedule entry. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSchedule,
    ) -> Result<Option<RoomSchedule>, sqlx::Error> {
        let query = format!(
            "UPDATE room_schedules SET
                start_date = COALESCE($2, start_date),
                end_date = COALESCE($3, end_date),
                status = COALESCE($4, status),
                guest_info = COALESCE($5, guest_info)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RoomSchedule>(&query)
            .bind(id)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.status)
            .bind(&input.guest_info)
            .fetch_optional(pool)
            .await
    }

    /// Delete a schedule entry. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM room_schedules WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
