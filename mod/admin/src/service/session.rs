//! Session handling — JWT issuance, verification, and revocation.
//!
//! Each login writes a session record keyed by session id; logout
//! marks it revoked, which invalidates the token even before `exp`.

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use projectboard_core::new_id;

use crate::model::{Claims, LoginResponse, Session};
use crate::service::{AdminError, AdminService, session_key};

impl AdminService {
    /// Verify credentials and issue a token on success.
    ///
    /// The failure message is the user-visible login notice.
    pub fn login(&self, username: &str, password: &str) -> Result<LoginResponse, AdminError> {
        if !self.verify(username, password) {
            return Err(AdminError::Unauthorized(
                "Invalid credentials, please try again.".into(),
            ));
        }
        self.issue_token(username)
    }

    /// Issue a signed JWT for a freshly created session.
    pub fn issue_token(&self, username: &str) -> Result<LoginResponse, AdminError> {
        let session_id = new_id();
        let now = chrono::Utc::now();
        let expires = now + chrono::Duration::seconds(self.config.token_ttl);

        let claims = Claims {
            sub: username.to_string(),
            sid: session_id.clone(),
            iat: now.timestamp(),
            exp: expires.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_bytes()),
        )
        .map_err(|e| AdminError::Internal(format!("JWT encode failed: {}", e)))?;

        let session = Session {
            id: session_id,
            username: username.to_string(),
            issued_at: now.to_rfc3339(),
            expires_at: expires.to_rfc3339(),
            revoked: false,
        };
        self.put_record(&session_key(&session.id), &session)?;

        Ok(LoginResponse {
            access_token: token,
            token_type: "Bearer".to_string(),
            expires_in: self.config.token_ttl,
        })
    }

    /// Verify and decode a JWT access token.
    /// Returns the claims if valid and the session is not revoked.
    pub fn verify_token(&self, token: &str) -> Result<Claims, AdminError> {
        let mut validation = Validation::default();
        validation.validate_exp = true;

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret.as_bytes()),
            &validation,
        )
        .map_err(|e| AdminError::Unauthorized(format!("invalid token: {}", e)))?;

        let claims = token_data.claims;

        // Fail closed: a session we cannot read might be revoked.
        match self.try_get_record::<Session>(&session_key(&claims.sid))? {
            Some(session) if session.revoked => {
                Err(AdminError::Unauthorized("session has been revoked".into()))
            }
            _ => Ok(claims),
        }
    }

    /// Revoke a session by id. Used by logout.
    pub fn revoke_session(&self, session_id: &str) -> Result<Session, AdminError> {
        let key = session_key(session_id);
        let mut session: Session = self.get_record(&key)?;
        session.revoked = true;
        self.put_record(&key, &session)?;
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::model::AdminCredential;
    use crate::service::credential::hash_password;
    use crate::service::test_support::{FailingStore, FakeGateway, service_with_kv, service_with_store};
    use crate::service::{AdminError, credential_key};

    #[test]
    fn login_issues_a_token_for_the_stored_pair() {
        let (_dir, svc) = service_with_store();
        svc.put_record(
            &credential_key("admin"),
            &AdminCredential {
                username: "admin".into(),
                password_hash: hash_password("s3cret").unwrap(),
            },
        )
        .unwrap();

        let resp = svc.login("admin", "s3cret").unwrap();
        assert_eq!(svc.verify_token(&resp.access_token).unwrap().sub, "admin");
    }

    #[test]
    fn login_failure_carries_the_exact_notice() {
        let (_dir, svc) = service_with_store();
        svc.put_record(
            &credential_key("admin"),
            &AdminCredential {
                username: "admin".into(),
                password_hash: hash_password("s3cret").unwrap(),
            },
        )
        .unwrap();

        let err = svc.login("admin", "wrong").unwrap_err();
        match err {
            AdminError::Unauthorized(msg) => {
                assert_eq!(msg, "Invalid credentials, please try again.");
            }
            other => panic!("expected Unauthorized, got {:?}", other),
        }
    }

    #[test]
    fn issue_then_verify_roundtrip() {
        let (_dir, svc) = service_with_store();
        let resp = svc.issue_token("admin").unwrap();
        assert_eq!(resp.token_type, "Bearer");

        let claims = svc.verify_token(&resp.access_token).unwrap();
        assert_eq!(claims.sub, "admin");
        assert!(!claims.sid.is_empty());
    }

    #[test]
    fn garbage_token_is_rejected() {
        let (_dir, svc) = service_with_store();
        assert!(svc.verify_token("not-a-jwt").is_err());
    }

    #[test]
    fn revoked_session_invalidates_token() {
        let (_dir, svc) = service_with_store();
        let resp = svc.issue_token("admin").unwrap();
        let claims = svc.verify_token(&resp.access_token).unwrap();

        let session = svc.revoke_session(&claims.sid).unwrap();
        assert!(session.revoked);
        assert!(svc.verify_token(&resp.access_token).is_err());
    }

    #[test]
    fn verify_token_rejects_when_the_session_lookup_fails() {
        // Both services share the test signing secret, so the token is
        // cryptographically valid against the failing-store service.
        let (_dir, issuing) = service_with_store();
        let resp = issuing.issue_token("admin").unwrap();

        let failing = service_with_kv(Arc::new(FailingStore), FakeGateway::ok());
        let err = failing.verify_token(&resp.access_token).unwrap_err();
        assert!(matches!(err, AdminError::Storage(_)));
    }

    #[test]
    fn revoking_unknown_session_is_not_found() {
        let (_dir, svc) = service_with_store();
        assert!(svc.revoke_session("no-such-session").is_err());
    }
}
