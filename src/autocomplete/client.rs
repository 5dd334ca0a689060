//! HTTP client for the symbol and tree search endpoints

use super::adapter::adapt;
use super::error::ClientError;
use super::options::{SearchKind, WidgetOptions, api_url};
use crate::suggest::AdaptedResult;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Issues autocomplete queries the way the page widgets do: a JSON body
/// `{"q": ...}` POSTed to `/api/<tag>/<endpoint>`.
#[derive(Debug, Clone)]
pub struct QueryClient {
    http: reqwest::Client,
    server: Url,
    tag: String,
}

impl QueryClient {
    /// Create a client for `tag` on `server`
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Transport` if the HTTP client cannot be built.
    pub fn new(server: Url, tag: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            server,
            tag: tag.into(),
        })
    }

    /// Fetch the raw response body for `query`
    ///
    /// # Errors
    ///
    /// Returns `ClientError` on transport failure, a non-success status or
    /// a body that is not JSON.
    pub async fn fetch(&self, kind: SearchKind, query: &str) -> Result<Value, ClientError> {
        let url = api_url(&self.server, &self.tag, kind)?;
        debug!(%url, query, "autocomplete request");

        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(WidgetOptions::params(query))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                endpoint: kind.endpoint().to_string(),
                status,
                body,
            });
        }

        Ok(response.json::<Value>().await?)
    }

    /// Query the backend and adapt the response into suggestions
    ///
    /// # Errors
    ///
    /// See [`QueryClient::fetch`].
    pub async fn search(&self, kind: SearchKind, query: &str) -> Result<AdaptedResult, ClientError> {
        let raw = self.fetch(kind, query).await?;
        let result = adapt(kind, &raw);
        debug!(count = result.len(), "autocomplete response adapted");
        Ok(result)
    }
}
