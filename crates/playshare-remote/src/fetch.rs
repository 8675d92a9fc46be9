use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// A remote file collection as the API returns it, keyed by file name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteCollection {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub files: BTreeMap<String, RemoteFile>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteFile {
    #[serde(default)]
    pub content: Option<String>,
    /// The API cut `content` short; the full text lives at `raw_url`.
    #[serde(default)]
    pub truncated: bool,
    #[serde(default)]
    pub raw_url: Option<String>,
}

impl RemoteFile {
    #[must_use]
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("remote reference `{id}` was not found")]
    NotFound { id: String },
    #[error("fetching remote reference `{id}` failed: {message}")]
    Transport {
        id: String,
        status: Option<u16>,
        message: String,
    },
}

impl FetchError {
    pub fn transport(id: &str, status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Transport {
            id: id.to_string(),
            status,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Capability to fetch a remote collection by reference id.
#[async_trait]
pub trait RemoteFetcher: Send + Sync {
    async fn fetch(&self, id: &str, api_base_url: &str) -> Result<RemoteCollection, FetchError>;
}

/// Ids are embedded in request paths, so only URL-safe ids are ever sent.
#[must_use]
pub fn is_valid_reference_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
