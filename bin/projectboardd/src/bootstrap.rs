//! Bootstrap — first-start checks and admin credential seeding.
//!
//! When projectboardd starts:
//! 1. Verify the config has an admin password hash — if not, refuse to start.
//! 2. Ensure the admin credential record exists in the store.

use std::sync::Arc;

use tracing::info;

use admin::model::AdminCredential;
use admin::service::credential_key;

use crate::config::ServerConfig;

/// Verify server configuration is ready for production use.
pub fn verify_config(config: &ServerConfig) -> anyhow::Result<()> {
    if config.admin.password_hash.is_empty() {
        anyhow::bail!(
            "No admin password hash found in configuration.\n\
             Set [admin].password_hash to an argon2id PHC string first."
        );
    }
    if config.jwt.secret.is_empty() {
        anyhow::bail!("JWT secret is empty in configuration.");
    }
    if config.storage.data_dir.is_empty() {
        anyhow::bail!("Storage data_dir is empty in configuration.");
    }
    if config.external_api.base_url.is_empty() {
        anyhow::bail!("External post API base_url is empty in configuration.");
    }
    Ok(())
}

/// Ensure the admin credential record exists. Creates it from the
/// configured hash if missing; an existing record is left untouched
/// (it is managed out-of-band).
pub fn ensure_admin_credential(
    kv: &Arc<dyn projectboard_kv::KVStore>,
    config: &ServerConfig,
) -> anyhow::Result<()> {
    let key = credential_key(&config.admin.username);

    match kv.get(&key) {
        Ok(Some(_)) => {
            info!("admin credential record already exists");
            Ok(())
        }
        Ok(None) | Err(_) => {
            let credential = AdminCredential {
                username: config.admin.username.clone(),
                password_hash: config.admin.password_hash.clone(),
            };
            let data = serde_json::to_vec(&credential)?;
            kv.set(&key, &data)
                .map_err(|e| anyhow::anyhow!("failed to seed admin credential: {}", e))?;
            info!("Seeded admin credential record for {}", config.admin.username);
            Ok(())
        }
    }
}
