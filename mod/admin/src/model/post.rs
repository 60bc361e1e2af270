use serde::{Deserialize, Serialize};

/// A project post — the single domain entity this system manages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Unique identifier, the store key.
    pub project_id: String,

    /// Post title.
    #[serde(default)]
    pub title: String,

    /// Post body text.
    #[serde(default)]
    pub description: String,

    /// Image URL or source-repository link, depending on the post.
    #[serde(default)]
    pub image: String,

    /// RFC 3339 creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// RFC 3339 last update timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Editable post fields, as submitted by the create and edit forms
/// and by the programmatic update endpoint.
///
/// No validation beyond presence: absent fields default to empty
/// strings, and empty strings are accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostInput {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub image: String,
}
