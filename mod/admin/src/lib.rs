//! Admin module — project post management behind a single admin login.
//!
//! # Resources
//!
//! - **Post** — project post record (title, description, image/link)
//! - **AdminCredential** — the one admin identity, argon2id hash
//! - **Session** — login session record, revoked at logout
//!
//! Post creation and updates are mirrored through an external post
//! API; reads and deletes go straight to the local store.
//!
//! # Usage
//!
//! ```ignore
//! use admin::{AdminModule, service::AdminConfig};
//!
//! let module = AdminModule::new(kv, gateway, config);
//! let router = module.routes(); // Merge at the application root
//! ```

pub mod api;
pub mod model;
pub mod service;

use std::sync::Arc;

use axum::Router;

use projectboard_core::Module;
use projectboard_kv::KVStore;

use crate::service::gateway::PostGateway;
use crate::service::{AdminConfig, AdminService};

/// Admin module implementing the Module trait.
///
/// Holds the AdminService and provides HTTP routes for all admin
/// endpoints.
pub struct AdminModule {
    service: Arc<AdminService>,
}

impl AdminModule {
    /// Create a new AdminModule.
    pub fn new(
        kv: Arc<dyn KVStore>,
        gateway: Arc<dyn PostGateway>,
        config: AdminConfig,
    ) -> Self {
        let service = AdminService::new(kv, gateway, config);
        Self { service }
    }
}

impl Module for AdminModule {
    fn name(&self) -> &str {
        "admin"
    }

    fn routes(&self) -> Router {
        api::build_router(self.service.clone())
    }
}
