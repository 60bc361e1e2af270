//! Credential check — verifies a login attempt against the stored
//! argon2id hash.

use crate::model::AdminCredential;
use crate::service::{AdminService, credential_key};

impl AdminService {
    /// Verify a submitted username/password pair.
    ///
    /// The lookup key is always the configured admin username; the
    /// submitted username is only compared against the stored one.
    /// A store failure or a missing record is treated as "no
    /// credentials found" and denies the attempt.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let stored: AdminCredential =
            match self.try_get_record(&credential_key(&self.config.admin_username)) {
                Ok(Some(cred)) => cred,
                Ok(None) | Err(_) => return false,
            };

        username == stored.username && verify_password(password, &stored.password_hash)
    }
}

/// Verify a password attempt against a stored argon2id hash.
pub fn verify_password(password: &str, hash: &str) -> bool {
    use argon2::Argon2;
    use password_hash::PasswordHash;
    use password_hash::PasswordVerifier;

    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

/// Hash a password with argon2id for storage, PHC string format.
pub fn hash_password(password: &str) -> Result<String, password_hash::Error> {
    use argon2::Argon2;
    use password_hash::{PasswordHasher, SaltString};
    use rand_core::OsRng;

    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::service::test_support::{FailingStore, FakeGateway, service_with_kv, service_with_store};

    #[test]
    fn test_verify_password_invalid_hash() {
        assert!(!verify_password("test", "not-a-hash"));
    }

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_password("hunter2").unwrap();
        assert!(verify_password("hunter2", &hash));
        assert!(!verify_password("hunter3", &hash));
    }

    #[test]
    fn verify_accepts_only_the_stored_pair() {
        let (_dir, svc) = service_with_store();
        let hash = hash_password("s3cret").unwrap();
        svc.put_record(
            &credential_key("admin"),
            &crate::model::AdminCredential {
                username: "admin".into(),
                password_hash: hash,
            },
        )
        .unwrap();

        assert!(svc.verify("admin", "s3cret"));
        assert!(!svc.verify("admin", "wrong"));
        assert!(!svc.verify("someone-else", "s3cret"));
    }

    #[test]
    fn verify_denies_when_no_record_exists() {
        let (_dir, svc) = service_with_store();
        assert!(!svc.verify("admin", "anything"));
    }

    #[test]
    fn verify_denies_when_the_store_fails() {
        // A store error is treated as "no credentials found".
        let svc = service_with_kv(Arc::new(FailingStore), FakeGateway::ok());
        assert!(!svc.verify("admin", "s3cret"));
    }
}
