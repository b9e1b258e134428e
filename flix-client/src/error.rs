/// Failure of a catalog request.
///
/// Every variant renders to the single message shown to the user, so `Display` is the
/// user-visible text and must stay stable.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response (connection, DNS, CORS...).
    #[error("{0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("HTTP error! status: {0}")]
    Status(u16),
    /// The body could not be parsed into the expected resource.
    #[error("{0}")]
    Decode(String),
    /// The body parsed, but lacks the minimum fields of the resource.
    #[error("could not retrieve the resource")]
    MissingResource,
    #[error("unknown error")]
    Unknown,
}

impl FetchError {
    /// Builds a [`FetchError::Network`] from a transport failure message, falling back to
    /// [`FetchError::Unknown`] when the transport gave no message at all.
    pub fn network(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::Unknown
        } else {
            Self::Network(message)
        }
    }
}
