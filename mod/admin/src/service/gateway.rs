//! External post API gateway.
//!
//! Create and update writes are mirrored through a separately deployed
//! HTTP service. The gateway is a trait so the service can be tested
//! without a network.

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;

use crate::model::PostInput;
use crate::service::AdminError;

/// Client for the external post API.
#[async_trait]
pub trait PostGateway: Send + Sync {
    /// Submit a new post. The remote service owns the resulting store
    /// write; success means it answered 201.
    async fn create_post(&self, fields: &PostInput) -> Result<(), AdminError>;

    /// Mirror an update to an existing post. Success means the remote
    /// service answered 200.
    async fn update_post(&self, project_id: &str, fields: &PostInput) -> Result<(), AdminError>;
}

/// reqwest-backed gateway against a fixed base URL.
pub struct HttpPostGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPostGateway {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl PostGateway for HttpPostGateway {
    async fn create_post(&self, fields: &PostInput) -> Result<(), AdminError> {
        let url = format!("{}/post", self.base_url);
        debug!("creating post via external API: {}", url);

        let resp = self
            .client
            .post(&url)
            .json(fields)
            .send()
            .await
            .map_err(|e| AdminError::Upstream(format!("post API unreachable: {}", e)))?;

        if resp.status() != StatusCode::CREATED {
            return Err(AdminError::Upstream(format!(
                "post API returned {} on create",
                resp.status()
            )));
        }
        Ok(())
    }

    async fn update_post(&self, project_id: &str, fields: &PostInput) -> Result<(), AdminError> {
        let url = format!("{}/posts/{}", self.base_url, project_id);
        debug!("updating post via external API: {}", url);

        let resp = self
            .client
            .put(&url)
            .json(fields)
            .send()
            .await
            .map_err(|e| AdminError::Upstream(format!("post API unreachable: {}", e)))?;

        if resp.status() != StatusCode::OK {
            return Err(AdminError::Upstream(format!(
                "post API returned {} on update",
                resp.status()
            )));
        }
        Ok(())
    }
}
