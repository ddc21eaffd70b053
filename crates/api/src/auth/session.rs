//! Opaque session tokens for the admin back office.
//!
//! A session token is a random string handed to the client (cookie and
//! JSON body); only its SHA-256 hash is stored server-side so a database
//! leak does not compromise active sessions. A per-session CSRF token is
//! returned on login for clients that rely on the cookie.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Name of the session cookie set on login.
pub const SESSION_COOKIE: &str = "pawstay_session";

/// Generate a cryptographically random session token.
///
/// Returns a tuple of `(plaintext_token, sha256_hex_hash)`. The plaintext
/// is sent to the client; only the hash is persisted.
pub fn generate_session_token() -> (String, String) {
    let plaintext = Uuid::new_v4().to_string();
    let hash = hash_session_token(&plaintext);
    (plaintext, hash)
}

/// Compute the SHA-256 hex digest of a session token.
///
/// Use this to compare an incoming token against the stored hash.
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Generate a random CSRF token to pair with a session.
pub fn generate_csrf_token() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_hash_is_stable() {
        let (plaintext, hash) = generate_session_token();

        let rehashed = hash_session_token(&plaintext);
        assert_eq!(hash, rehashed, "hash of the same token must be stable");

        // Sanity: the hash should be a 64-char hex string (SHA-256).
        assert_eq!(hash.len(), 64);
    }

    #[test]
    fn tokens_are_unique() {
        let (a, _) = generate_session_token();
        let (b, _) = generate_session_token();
        assert_ne!(a, b);
        assert_ne!(generate_csrf_token(), generate_csrf_token());
    }
}
