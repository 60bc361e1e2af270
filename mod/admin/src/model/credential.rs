use serde::{Deserialize, Serialize};

/// The stored admin credential record.
///
/// Exactly one record is consulted — the identity is fixed by server
/// configuration, and no registration flow exists. The record is
/// created out-of-band (or seeded at bootstrap) and read-only to
/// request handlers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminCredential {
    /// Login name, the store key.
    pub username: String,

    /// Argon2id hash of the password, PHC string format.
    pub password_hash: String,
}
