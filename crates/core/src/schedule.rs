//! Room schedule entry states.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const STATUS_OCCUPIED: &str = "occupied";
pub const STATUS_AVAILABLE: &str = "available";
pub const STATUS_MAINTENANCE: &str = "maintenance";

/// Status of a `room_schedules` entry.
///
/// Only `Occupied` entries block bookings; `Available` and `Maintenance`
/// exist for the back-office calendar and do not participate in the
/// availability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    Occupied,
    Available,
    Maintenance,
}

impl ScheduleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleStatus::Occupied => STATUS_OCCUPIED,
            ScheduleStatus::Available => STATUS_AVAILABLE,
            ScheduleStatus::Maintenance => STATUS_MAINTENANCE,
        }
    }

    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            STATUS_OCCUPIED => Ok(ScheduleStatus::Occupied),
            STATUS_AVAILABLE => Ok(ScheduleStatus::Available),
            STATUS_MAINTENANCE => Ok(ScheduleStatus::Maintenance),
            other => Err(CoreError::Validation(format!(
                "Invalid schedule status '{other}': expected occupied, available, or maintenance"
            ))),
        }
    }
}

impl std::fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
