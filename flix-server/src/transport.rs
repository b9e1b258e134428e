use std::time::Duration;

use anyhow::Context;
use flix_client::{FetchError, RawResponse, Transport};
use reqwest::header::{CACHE_CONTROL, HeaderValue};

/// [`Transport`] used while rendering pages. Every request is bounded by the configured timeout.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(request_timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .context("Building the HTTP client of the catalog backend")?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, FetchError> {
        let response = self
            .client
            .get(url)
            .header(CACHE_CONTROL, HeaderValue::from_static("no-store"))
            .send()
            .await
            .map_err(|e| FetchError::network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::network(e.to_string()))?;

        tracing::debug!(url, status, "Catalog backend responded");
        Ok(RawResponse { status, body })
    }
}
