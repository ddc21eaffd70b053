//! Contact message model and DTOs.

use pawstay_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A contact message row from the `contact_messages` table.
///
/// Created by the public contact form; the back office can mark messages
/// read and delete them.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactMessage {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
    pub is_read: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a contact message (public form).
#[derive(Debug, Deserialize)]
pub struct CreateContactMessage {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: String,
    pub body: String,
}
