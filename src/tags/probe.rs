//! Resource existence checks

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use url::Url;

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Checks whether a resource exists before navigating to it
#[async_trait]
pub trait ResourceProbe: Send + Sync {
    /// `true` when `url` answers with a success status.
    ///
    /// Any failure, including transport errors, means "does not exist".
    async fn exists(&self, url: &Url) -> bool;
}

/// Probe issuing HTTP `HEAD` requests
#[derive(Debug, Clone, Default)]
pub struct HttpProbe {
    http: reqwest::Client,
}

impl HttpProbe {
    /// Create a probe with the default timeout
    ///
    /// # Errors
    ///
    /// Returns `reqwest::Error` if the HTTP client cannot be built.
    pub fn new() -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(PROBE_TIMEOUT).build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl ResourceProbe for HttpProbe {
    async fn exists(&self, url: &Url) -> bool {
        match self.http.head(url.clone()).send().await {
            Ok(response) => {
                let status = response.status();
                debug!(%url, %status, "probe answered");
                status.is_success()
            }
            Err(e) => {
                debug!(%url, error = %e, "probe failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_success_status_exists() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .and(path("/v2/sources/proj/file.cpp"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let url = Url::parse(&format!("{}/v2/sources/proj/file.cpp", server.uri())).unwrap();
        assert!(HttpProbe::new().unwrap().exists(&url).await);
    }

    #[tokio::test]
    async fn test_not_found_does_not_exist() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let url = Url::parse(&format!("{}/v2/sources/proj/gone.cpp", server.uri())).unwrap();
        assert!(!HttpProbe::new().unwrap().exists(&url).await);
    }

    #[tokio::test]
    async fn test_unreachable_host_does_not_exist() {
        let url = Url::parse("http://127.0.0.1:1/v2/sources/meta/index.html").unwrap();
        assert!(!HttpProbe::new().unwrap().exists(&url).await);
    }
}
