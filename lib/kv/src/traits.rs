use crate::error::KVError;

/// KVStore provides the key-value storage interface the admin module
/// persists through.
///
/// Keys follow a namespaced convention: `admin/posts/<project_id>`,
/// `admin/credentials/<username>`, `admin/sessions/<session_id>`.
pub trait KVStore: Send + Sync {
    /// Get the value for a key. Returns None if the key does not exist.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, KVError>;

    /// Set a key-value pair, overwriting any existing value.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), KVError>;

    /// Delete a key. Deleting an absent key is a no-op, not an error.
    fn delete(&self, key: &str) -> Result<(), KVError>;

    /// Scan all keys matching a prefix. Returns sorted (key, value) pairs.
    /// Unbounded: callers own any truncation.
    fn scan(&self, prefix: &str) -> Result<Vec<(String, Vec<u8>)>, KVError>;
}
