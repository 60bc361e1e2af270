pub mod credential;
pub mod gateway;
pub mod post;
pub mod session;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use projectboard_kv::KVStore;

use crate::service::gateway::PostGateway;

/// Admin service error type.
#[derive(Debug, Error)]
pub enum AdminError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("validation: {0}")]
    Validation(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("upstream: {0}")]
    Upstream(String),

    #[error("storage: {0}")]
    Storage(String),

    #[error("internal: {0}")]
    Internal(String),
}

impl From<AdminError> for projectboard_core::ServiceError {
    fn from(e: AdminError) -> Self {
        match e {
            AdminError::NotFound(m) => projectboard_core::ServiceError::NotFound(m),
            AdminError::Validation(m) => projectboard_core::ServiceError::Validation(m),
            AdminError::Unauthorized(m) => projectboard_core::ServiceError::Unauthorized(m),
            AdminError::Upstream(m) => projectboard_core::ServiceError::Upstream(m),
            AdminError::Storage(m) => projectboard_core::ServiceError::Storage(m),
            AdminError::Internal(m) => projectboard_core::ServiceError::Internal(m),
        }
    }
}

/// Configuration for the admin service.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// The one admin identity. Lookups always use this name, never the
    /// submitted one.
    pub admin_username: String,
    /// JWT signing secret.
    pub jwt_secret: String,
    /// Access token lifetime in seconds (default: 24h).
    pub token_ttl: i64,
}

/// Store key for a credential record.
pub fn credential_key(username: &str) -> String {
    format!("admin/credentials/{}", username)
}

/// Store key for a post record.
pub fn post_key(project_id: &str) -> String {
    format!("admin/posts/{}", project_id)
}

/// Store key for a session record.
pub fn session_key(session_id: &str) -> String {
    format!("admin/sessions/{}", session_id)
}

/// The admin service. Holds the storage backend, the external post
/// API gateway, and configuration.
pub struct AdminService {
    pub(crate) kv: Arc<dyn KVStore>,
    pub(crate) gateway: Arc<dyn PostGateway>,
    pub(crate) config: AdminConfig,
}

impl AdminService {
    pub fn new(
        kv: Arc<dyn KVStore>,
        gateway: Arc<dyn PostGateway>,
        config: AdminConfig,
    ) -> Arc<Self> {
        Arc::new(Self { kv, gateway, config })
    }

    // ── Generic JSON record helpers over the KV store ──

    /// Write a record as JSON under a key, overwriting any existing value.
    pub(crate) fn put_record<T: Serialize>(&self, key: &str, record: &T) -> Result<(), AdminError> {
        let data =
            serde_json::to_vec(record).map_err(|e| AdminError::Internal(e.to_string()))?;
        self.kv
            .set(key, &data)
            .map_err(|e| AdminError::Storage(e.to_string()))
    }

    /// Get a record by key, or None if the key is absent.
    pub(crate) fn try_get_record<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<T>, AdminError> {
        let data = self
            .kv
            .get(key)
            .map_err(|e| AdminError::Storage(e.to_string()))?;
        match data {
            Some(bytes) => {
                let record = serde_json::from_slice(&bytes)
                    .map_err(|e| AdminError::Internal(e.to_string()))?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    /// Get a record by key, failing with NotFound if absent.
    pub(crate) fn get_record<T: DeserializeOwned>(&self, key: &str) -> Result<T, AdminError> {
        self.try_get_record(key)?
            .ok_or_else(|| AdminError::NotFound(key.to_string()))
    }

    /// Delete a record by key. A no-op when the key is absent.
    pub(crate) fn delete_record(&self, key: &str) -> Result<(), AdminError> {
        self.kv
            .delete(key)
            .map_err(|e| AdminError::Storage(e.to_string()))
    }

    /// Scan all records under a prefix, in store (key-sorted) order.
    pub(crate) fn scan_records<T: DeserializeOwned>(
        &self,
        prefix: &str,
    ) -> Result<Vec<T>, AdminError> {
        let pairs = self
            .kv
            .scan(prefix)
            .map_err(|e| AdminError::Storage(e.to_string()))?;
        let mut records = Vec::with_capacity(pairs.len());
        for (_key, bytes) in &pairs {
            let record =
                serde_json::from_slice(bytes).map_err(|e| AdminError::Internal(e.to_string()))?;
            records.push(record);
        }
        Ok(records)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use projectboard_kv::{KVError, KVStore, RedbStore};

    use crate::model::PostInput;
    use crate::service::gateway::PostGateway;
    use crate::service::{AdminConfig, AdminError, AdminService};

    pub(crate) fn test_config() -> AdminConfig {
        AdminConfig {
            admin_username: "admin".to_string(),
            jwt_secret: "test-secret".to_string(),
            token_ttl: 86400,
        }
    }

    /// Store stand-in where every operation fails at the storage layer.
    pub(crate) struct FailingStore;

    impl KVStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, KVError> {
            Err(KVError::Storage("injected failure".into()))
        }

        fn set(&self, _key: &str, _value: &[u8]) -> Result<(), KVError> {
            Err(KVError::Storage("injected failure".into()))
        }

        fn delete(&self, _key: &str) -> Result<(), KVError> {
            Err(KVError::Storage("injected failure".into()))
        }

        fn scan(&self, _prefix: &str) -> Result<Vec<(String, Vec<u8>)>, KVError> {
            Err(KVError::Storage("injected failure".into()))
        }
    }

    /// In-memory gateway stand-in. Records every call; optionally
    /// answers every call with an upstream failure.
    pub(crate) struct FakeGateway {
        pub fail: bool,
        pub creates: Mutex<Vec<PostInput>>,
        pub updates: Mutex<Vec<(String, PostInput)>>,
    }

    impl FakeGateway {
        pub fn ok() -> Arc<Self> {
            Arc::new(Self {
                fail: false,
                creates: Mutex::new(Vec::new()),
                updates: Mutex::new(Vec::new()),
            })
        }

        pub fn failing() -> Arc<Self> {
            Arc::new(Self {
                fail: true,
                creates: Mutex::new(Vec::new()),
                updates: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl PostGateway for FakeGateway {
        async fn create_post(&self, fields: &PostInput) -> Result<(), AdminError> {
            if self.fail {
                return Err(AdminError::Upstream("post API returned 500 on create".into()));
            }
            self.creates.lock().unwrap().push(fields.clone());
            Ok(())
        }

        async fn update_post(
            &self,
            project_id: &str,
            fields: &PostInput,
        ) -> Result<(), AdminError> {
            if self.fail {
                return Err(AdminError::Upstream("post API returned 500 on update".into()));
            }
            self.updates
                .lock()
                .unwrap()
                .push((project_id.to_string(), fields.clone()));
            Ok(())
        }
    }

    pub(crate) fn service_with_kv(
        kv: Arc<dyn KVStore>,
        gateway: Arc<FakeGateway>,
    ) -> Arc<AdminService> {
        AdminService::new(kv, gateway, test_config())
    }

    pub(crate) fn service_with_gateway(
        gateway: Arc<FakeGateway>,
    ) -> (tempfile::TempDir, Arc<AdminService>) {
        let dir = tempfile::tempdir().unwrap();
        let kv = Arc::new(RedbStore::open(&dir.path().join("test.redb")).unwrap());
        let svc = service_with_kv(kv, gateway);
        (dir, svc)
    }

    pub(crate) fn service_with_store() -> (tempfile::TempDir, Arc<AdminService>) {
        service_with_gateway(FakeGateway::ok())
    }
}
