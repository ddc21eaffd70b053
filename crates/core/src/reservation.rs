//! Reservation lifecycle states and the guest animal manifest.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Status stored in `reservations.status`.
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_CONFIRMED: &str = "confirmed";
pub const STATUS_CANCELLED: &str = "cancelled";

/// Lifecycle state of a booking request.
///
/// Public submissions always start `Pending`; only the back office moves
/// a reservation to `Confirmed` or `Cancelled`. Reservations are never
/// deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => STATUS_PENDING,
            ReservationStatus::Confirmed => STATUS_CONFIRMED,
            ReservationStatus::Cancelled => STATUS_CANCELLED,
        }
    }

    /// Parse a stored or submitted status string.
    ///
    /// Anything outside the three lifecycle states is a validation error;
    /// callers must leave the stored value untouched on failure.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            STATUS_PENDING => Ok(ReservationStatus::Pending),
            STATUS_CONFIRMED => Ok(ReservationStatus::Confirmed),
            STATUS_CANCELLED => Ok(ReservationStatus::Cancelled),
            other => Err(CoreError::Validation(format!(
                "Invalid reservation status '{other}': expected pending, confirmed, or cancelled"
            ))),
        }
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One animal on a booking request, stored as JSONB on the reservation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Animal {
    pub name: String,
    /// Species or breed as entered by the customer (e.g. "dog", "cat").
    pub species: String,
    pub sex: Option<String>,
    /// Requested extra services (grooming, walks, medication, ...).
    #[serde(default)]
    pub services: Vec<String>,
    pub comment: Option<String>,
}
