use std::sync::Arc;

use playshare_project::ProjectFile;

use crate::convert::collection_to_files;
use crate::fetch::FetchError;
use crate::fetch::RemoteFetcher;

/// A remote reference together with the files it resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteProject {
    pub id: String,
    pub files: Vec<ProjectFile>,
}

/// Turns reference ids into project files through a [`RemoteFetcher`].
#[derive(Clone)]
pub struct RemoteResolver {
    fetcher: Arc<dyn RemoteFetcher>,
    api_base_url: String,
}

impl RemoteResolver {
    pub fn new(fetcher: Arc<dyn RemoteFetcher>, api_base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            api_base_url: api_base_url.into(),
        }
    }

    #[must_use]
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub async fn resolve(&self, id: &str) -> Result<RemoteProject, FetchError> {
        let collection = self.fetcher.fetch(id, &self.api_base_url).await?;
        let files = collection_to_files(&collection);
        tracing::debug!(id, count = files.len(), "resolved remote reference");
        Ok(RemoteProject {
            id: id.to_string(),
            files,
        })
    }
}

impl std::fmt::Debug for RemoteResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteResolver")
            .field("api_base_url", &self.api_base_url)
            .finish_non_exhaustive()
    }
}
