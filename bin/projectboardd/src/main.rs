//! `projectboardd` — the projectboard server binary.
//!
//! Usage:
//!   projectboardd serve -c <context-name-or-path> [--listen <addr>]
//!   projectboardd hash-password <password>
//!
//! The context name resolves to `/etc/projectboard/<name>.toml`.
//! If a path with `/` or `.` is given, it's used directly.

mod bootstrap;
mod config;
mod routes;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;

use admin::service::AdminConfig;
use admin::service::credential::hash_password;
use admin::service::gateway::{HttpPostGateway, PostGateway};
use projectboard_core::Module;

use config::ServerConfig;

/// Projectboard server.
#[derive(Parser, Debug)]
#[command(name = "projectboardd", about = "Projectboard admin server")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the server.
    Serve {
        /// Context name or path to config file.
        #[arg(short = 'c', long = "config", required = true)]
        config: String,

        /// Listen address.
        #[arg(long = "listen", default_value = "0.0.0.0:8080")]
        listen: String,
    },

    /// Hash an admin password for the [admin].password_hash config key.
    HashPassword {
        /// The password to hash.
        password: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { config, listen } => serve(&config, &listen).await,
        Command::HashPassword { password } => {
            let hash = hash_password(&password)
                .map_err(|e| anyhow::anyhow!("failed to hash password: {}", e))?;
            println!("{}", hash);
            Ok(())
        }
    }
}

async fn serve(config: &str, listen: &str) -> anyhow::Result<()> {
    // Load server configuration.
    let config_path = ServerConfig::resolve_path(config);
    info!("Loading configuration from {}", config_path.display());
    let server_config = ServerConfig::load(&config_path)?;

    // Verify configuration is valid.
    bootstrap::verify_config(&server_config)?;

    // Initialize storage.
    let data_dir = std::path::PathBuf::from(&server_config.storage.data_dir);
    std::fs::create_dir_all(&data_dir)?;

    let kv: Arc<dyn projectboard_kv::KVStore> = Arc::new(
        projectboard_kv::RedbStore::open(&data_dir.join("data.redb"))
            .map_err(|e| anyhow::anyhow!("failed to open KV store: {}", e))?,
    );

    // Bootstrap: ensure the admin credential record exists.
    bootstrap::ensure_admin_credential(&kv, &server_config)?;

    // External post API gateway.
    let gateway: Arc<dyn PostGateway> = Arc::new(HttpPostGateway::new(
        server_config.external_api.base_url.clone(),
    ));

    let admin_config = AdminConfig {
        admin_username: server_config.admin.username.clone(),
        jwt_secret: server_config.jwt.secret.clone(),
        token_ttl: server_config.jwt.expire_secs,
    };
    let admin_module = admin::AdminModule::new(kv, gateway, admin_config);
    info!("Admin module initialized");

    let module_routes = vec![(admin_module.name(), admin_module.routes())];

    // Build router.
    let app = routes::build_router(module_routes);

    // Start server.
    let listener = tokio::net::TcpListener::bind(listen).await?;
    info!("Projectboard server listening on {}", listen);
    axum::serve(listener, app).await?;

    Ok(())
}
