//! Repository for the `reservations` table.

use pawstay_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::reservation::{CreateReservation, Reservation};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, customer_name, email, phone, start_date, end_date, room_id, \
                        animal_count, animals, message, status, created_at, updated_at";

/// Provides persistence for booking requests.
///
/// Reservations are never deleted; the public side only inserts and the
/// back office only changes `status`.
pub struct ReservationRepo;

impl ReservationRepo {
    /// Insert a new reservation with status `pending`, returning the row.
    ///
    /// String fields are expected to be sanitized by the caller before
    /// this point.
    pub async fn create(
        pool: &PgPool,
        input: &CreateReservation,
    ) -> Result<Reservation, sqlx::Error> {
        let query = format!(
            "INSERT INTO reservations
                 (customer_name, email, phone, start_date, end_date, room_id,
                  animal_count, animals, message)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(&input.customer_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.room_id)
            .bind(input.animal_count)
            .bind(Json(&input.animals))
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// Find a reservation by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Reservation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reservations WHERE id = $1");
        sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List reservations, newest first, optionally filtered by status.
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
    ) -> Result<Vec<Reservation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reservations
             WHERE ($1::text IS NULL OR status = $1)
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// Set the status of a reservation.
    ///
    /// The caller must validate the status value first; this method only
    /// persists it. Returns `None` if no row with the given `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
    ) -> Result<Option<Reservation>, sqlx::Error> {
        let query = format!(
            "UPDATE reservations SET status = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }
}
