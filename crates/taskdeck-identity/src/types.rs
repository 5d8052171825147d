//! Identity type definitions.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// User account record
///
/// Created once by registration and never mutated afterwards. The password
/// is stored only as an Argon2id PHC string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    pub identity_id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: u64,
}

/// Opaque bearer credential, one active per identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    pub token: String,
    pub identity_id: Uuid,
    pub created_at: u64,
}

/// Registration request
#[derive(Debug, Clone)]
pub struct NewIdentity {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Result of a successful registration or login
#[derive(Debug, Clone)]
pub struct AuthGrant {
    pub token: String,
    pub identity: Identity,
}

/// Returns the current Unix timestamp in seconds.
///
/// Single source of truth for timestamp generation across taskdeck.
///
/// # Panics
///
/// Panics if the system clock is set before the Unix epoch.
pub fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("System time is before Unix epoch")
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_timestamp() {
        let ts1 = current_timestamp();
        std::thread::sleep(std::time::Duration::from_millis(10));
        let ts2 = current_timestamp();

        assert!(ts2 >= ts1, "Timestamp should increase with time");
        assert!(
            ts1 > 1_600_000_000,
            "Timestamp should be reasonable (after Sep 2020)"
        );
    }
}
