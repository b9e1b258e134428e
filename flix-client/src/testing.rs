//! Test doubles shared by the unit tests of this crate.

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use crate::{FetchError, RawResponse, Transport};

/// A transport answering from a table of canned responses and recording every requested URL.
/// Unknown URLs fail as a refused connection.
#[derive(Default)]
pub struct MockTransport {
    responses: RefCell<HashMap<String, Result<RawResponse, FetchError>>>,
    delays: RefCell<HashMap<String, Duration>>,
    requests: RefCell<Vec<String>>,
}

impl MockTransport {
    pub fn respond_json(&self, url: &str, status: u16, body: serde_json::Value) {
        self.respond_raw(url, status, &body.to_string());
    }

    pub fn respond_raw(&self, url: &str, status: u16, body: &str) {
        self.responses.borrow_mut().insert(
            url.to_string(),
            Ok(RawResponse {
                status,
                body: body.to_string(),
            }),
        );
    }

    pub fn fail(&self, url: &str, error: FetchError) {
        self.responses
            .borrow_mut()
            .insert(url.to_string(), Err(error));
    }

    /// Holds the response for `url` back for the given time.
    pub fn delay(&self, url: &str, delay: Duration) {
        self.delays.borrow_mut().insert(url.to_string(), delay);
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for MockTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, FetchError> {
        self.requests.borrow_mut().push(url.to_string());

        let delay = self.delays.borrow().get(url).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.responses
            .borrow()
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(FetchError::network("connection refused")))
    }
}
