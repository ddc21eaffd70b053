//! Repository for the `room_pricing` table.

use pawstay_core::types::DbId;
use sqlx::PgPool;

use crate::models::pricing::{CreatePricing, RoomPricing, UpdatePricing};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, room_id, label, price_cents, period, position, \
                        created_at, updated_at";

/// Provides CRUD operations for room pricing lines.
pub struct PricingRepo;

impl PricingRepo {
    /// Insert a new pricing line, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePricing,
    ) -> Result<RoomPricing, sqlx::Error> {
        let query = format!(
            "INSERT INTO room_pricing (room_id, label, price_cents, period, position)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RoomPricing>(&query)
            .bind(input.room_id)
            .bind(&input.label)
            .bind(input.price_cents)
            .bind(&input.period)
            .bind(input.position)
            .fetch_one(pool)
            .await
    }

    /// Find a pricing line by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<RoomPricing>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM room_pricing WHERE id = $1");
        sqlx::query_as::<_, RoomPricing>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List pricing lines, optionally scoped to one room, in display order.
    pub async fn list(
        pool: &PgPool,
        room_id: Option<DbId>,
    ) -> Result<Vec<RoomPricing>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM room_pricing
             WHERE ($1::bigint IS NULL OR room_id = $1)
             ORDER BY room_id, position"
        );
        sqlx::query_as::<_, RoomPricing>(&query)
            .bind(room_id)
            .fetch_all(pool)
            .await
    }

    /// Update a pricing line. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePricing,
    ) -> Result<Option<RoomPricing>, sqlx::Error> {
        let query = format!(
            "UPDATE room_pricing SET
                label = COALESCE($2, label),
                price_cents = COALESCE($3, price_cents),
                period = COALESCE($4, period),
                position = COALESCE($5, position)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RoomPricing>(&query)
            .bind(id)
            .bind(&input.label)
            .bind(input.price_cents)
            .bind(&input.period)
            .bind(input.position)
            .fetch_optional(pool)
            .await
    }

    /// Delete a pricing line. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM room_pricing WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
