//! Post record lifecycle.
//!
//! Reads and deletes go straight to the store. Creation is submitted
//! to the external post API, which owns the resulting store write.
//! Updates use a single write path shared by the form-driven and the
//! programmatic routes: mirror to the external API first, then write
//! the record locally.

use projectboard_core::now_rfc3339;

use crate::model::{Post, PostInput};
use crate::service::{AdminError, AdminService, post_key};

const POST_PREFIX: &str = "admin/posts/";

impl AdminService {
    /// Submit a new post to the external post API.
    ///
    /// The store is not written here — the remote service owns that
    /// side effect. No retry and no idempotency key: a duplicate
    /// submission creates a duplicate record upstream.
    pub async fn create_post(&self, fields: PostInput) -> Result<(), AdminError> {
        self.gateway.create_post(&fields).await
    }

    /// Point lookup by project id.
    pub fn get_post(&self, project_id: &str) -> Result<Post, AdminError> {
        self.try_get_record(&post_key(project_id))?
            .ok_or_else(|| AdminError::NotFound(format!("post '{}' not found", project_id)))
    }

    /// Full unbounded scan of the post store, in store order.
    pub fn list_posts(&self) -> Result<Vec<Post>, AdminError> {
        self.scan_records(POST_PREFIX)
    }

    /// Count posts with a separate projected scan of the keys only.
    pub fn count_posts(&self) -> Result<usize, AdminError> {
        let pairs = self
            .kv
            .scan(POST_PREFIX)
            .map_err(|e| AdminError::Storage(e.to_string()))?;
        Ok(pairs.len())
    }

    /// Update a post: mirror to the external API, then write the full
    /// record to the store.
    ///
    /// A missing key is upserted, matching the managed store's
    /// update-by-key semantics. Last write wins; there is no conflict
    /// detection or versioning.
    pub async fn update_post(
        &self,
        project_id: &str,
        fields: PostInput,
    ) -> Result<Post, AdminError> {
        self.gateway.update_post(project_id, &fields).await?;

        let now = now_rfc3339();
        let existing: Option<Post> = self.try_get_record(&post_key(project_id))?;
        let post = Post {
            project_id: project_id.to_string(),
            title: fields.title,
            description: fields.description,
            image: fields.image,
            created_at: existing
                .and_then(|p| p.created_at)
                .or_else(|| Some(now.clone())),
            updated_at: Some(now),
        };

        self.put_record(&post_key(project_id), &post)?;
        Ok(post)
    }

    /// Delete a post by key. Idempotent: deleting an absent key
    /// succeeds. The external API is not involved.
    pub fn delete_post(&self, project_id: &str) -> Result<(), AdminError> {
        self.delete_record(&post_key(project_id))
    }
}
