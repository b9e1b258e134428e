use gloo_net::http::Request;
use web_sys::RequestCache;

use flix_client::{FetchError, RawResponse, Transport};

/// [`Transport`] on top of the browser `fetch` API. Responses are never served from the HTTP
/// cache.
#[derive(Debug, Clone, Default)]
pub struct GlooTransport;

#[async_trait::async_trait(?Send)]
impl Transport for GlooTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, FetchError> {
        let response = Request::get(url)
            .cache(RequestCache::NoStore)
            .send()
            .await
            .map_err(|e| FetchError::network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::network(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}
