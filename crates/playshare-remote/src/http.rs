use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;

use crate::fetch::is_valid_reference_id;
use crate::fetch::FetchError;
use crate::fetch::RemoteCollection;
use crate::fetch::RemoteFetcher;

const USER_AGENT: &str = concat!("playshare/", env!("CARGO_PKG_VERSION"));
const API_MEDIA_TYPE: &str = "application/vnd.github+json";

/// [`RemoteFetcher`] backed by a gist-compatible HTTP API.
///
/// Requests `GET {api_base_url}/gists/{id}`. A 404 maps to
/// [`FetchError::NotFound`]; every other failure is a transport error.
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self::with_client(client))
    }

    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn fetch_raw(&self, id: &str, raw_url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(raw_url)
            .send()
            .await
            .map_err(|e| FetchError::transport(id, None, e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::transport(
                id,
                Some(status.as_u16()),
                format!("HTTP {status} fetching {raw_url}"),
            ));
        }
        response
            .text()
            .await
            .map_err(|e| FetchError::transport(id, Some(status.as_u16()), e.to_string()))
    }
}

#[async_trait]
impl RemoteFetcher for HttpFetcher {
    async fn fetch(&self, id: &str, api_base_url: &str) -> Result<RemoteCollection, FetchError> {
        if !is_valid_reference_id(id) {
            tracing::debug!(id, "refusing to request malformed reference id");
            return Err(FetchError::NotFound { id: id.to_string() });
        }

        let url = format!("{}/gists/{id}", api_base_url.trim_end_matches('/'));
        tracing::debug!(%url, "fetching remote collection");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, API_MEDIA_TYPE)
            .send()
            .await
            .map_err(|e| FetchError::transport(id, None, e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound { id: id.to_string() });
        }
        if !status.is_success() {
            return Err(FetchError::transport(
                id,
                Some(status.as_u16()),
                format!("HTTP {status}"),
            ));
        }

        let mut collection: RemoteCollection = response
            .json()
            .await
            .map_err(|e| FetchError::transport(id, Some(status.as_u16()), e.to_string()))?;

        for (name, file) in &mut collection.files {
            if !file.truncated {
                continue;
            }
            let Some(raw_url) = file.raw_url.clone() else {
                tracing::warn!(id, name = %name, "truncated file has no raw url");
                continue;
            };
            tracing::debug!(id, name = %name, "fetching truncated file content");
            file.content = Some(self.fetch_raw(id, &raw_url).await?);
            file.truncated = false;
        }

        Ok(collection)
    }
}
