//! Server configuration, loaded from a TOML context file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Full server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub admin: AdminSection,
    pub jwt: JwtSection,
    pub storage: StorageSection,
    pub external_api: ExternalApiSection,
}

/// The single admin identity.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminSection {
    /// Login name. Credential lookups always use this name.
    pub username: String,
    /// Argon2id hash of the admin password, PHC string format.
    pub password_hash: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtSection {
    /// Signing secret. Must be non-empty; there is no fallback.
    pub secret: String,
    /// Token lifetime in seconds.
    #[serde(default = "default_expire_secs")]
    pub expire_secs: i64,
}

fn default_expire_secs() -> i64 {
    86400 // 24h
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSection {
    /// Directory holding the embedded database file.
    pub data_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExternalApiSection {
    /// Base URL of the external post API deployment.
    pub base_url: String,
}

impl ServerConfig {
    /// Resolve a context name or path to a config file path.
    ///
    /// A bare name resolves to `/etc/projectboard/<name>.toml`; anything
    /// containing `/` or `.` is used as a path directly.
    pub fn resolve_path(name_or_path: &str) -> PathBuf {
        if name_or_path.contains('/') || name_or_path.contains('.') {
            PathBuf::from(name_or_path)
        } else {
            PathBuf::from(format!("/etc/projectboard/{}.toml", name_or_path))
        }
    }

    /// Load and parse the config file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("cannot read {}: {}", path.display(), e))?;
        let config: ServerConfig = toml::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("cannot parse {}: {}", path.display(), e))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_name_vs_path() {
        assert_eq!(
            ServerConfig::resolve_path("prod"),
            PathBuf::from("/etc/projectboard/prod.toml")
        );
        assert_eq!(
            ServerConfig::resolve_path("./local.toml"),
            PathBuf::from("./local.toml")
        );
    }

    #[test]
    fn parse_full_config() {
        let raw = r#"
            [admin]
            username = "tanvir"
            password_hash = "$argon2id$v=19$m=19456,t=2,p=1$abc$def"

            [jwt]
            secret = "s"

            [storage]
            data_dir = "/var/lib/projectboard"

            [external_api]
            base_url = "https://posts.example.com/deployed"
        "#;
        let config: ServerConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.admin.username, "tanvir");
        assert_eq!(config.jwt.expire_secs, 86400);
        assert_eq!(config.external_api.base_url, "https://posts.example.com/deployed");
    }
}
