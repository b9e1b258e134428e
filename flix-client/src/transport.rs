use crate::FetchError;

/// A response as seen by the data access layer: the status and the undecoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The HTTP layer used to reach the catalog backend.
///
/// Implementations only perform cache-disabled `GET` requests and report failures to obtain a
/// response at all as [`FetchError::Network`]. Status and body handling belong to
/// [`crate::CatalogClient`].
///
/// Futures are not required to be `Send`, since the browser implementation runs on the single
/// threaded wasm executor.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    async fn get(&self, url: &str) -> Result<RawResponse, FetchError>;
}
