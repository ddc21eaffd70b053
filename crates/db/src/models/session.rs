//! Admin session model and DTOs.

use pawstay_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A session row from the `user_sessions` table.
///
/// Only the SHA-256 hash of the opaque session token is stored, so a
/// database leak does not expose live sessions.
#[derive(Debug, Clone, FromRow)]
pub struct UserSession {
    pub id: DbId,
    pub user_id: DbId,
    pub token_hash: String,
    pub csrf_token: String,
    pub expires_at: Timestamp,
    pub is_revoked: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new session.
pub struct CreateSession {
    pub user_id: DbId,
    pub token_hash: String,
    pub csrf_token: String,
    pub expires_at: Timestamp,
}
