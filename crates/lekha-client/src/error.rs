//! Error types for the network client.

use lekha_core::error::LekhaError;

/// Errors from the knowledge-service client.
///
/// `Offline` is deliberately not an error: the health probe reports a
/// [`ConnectionStatus`](lekha_core::types::ConnectionStatus) instead, since
/// an unreachable service is an observable state, not a failure of the call.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("failed to build HTTP client: {0}")]
    Build(String),
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl ClientError {
    /// Best available human-readable detail for a transcript notice.
    ///
    /// For `RequestFailed` this is the server's `detail` text when the error
    /// body carried one, otherwise a generic description chosen by the client.
    pub fn detail(&self) -> &str {
        match self {
            ClientError::Build(d)
            | ClientError::RequestFailed(d)
            | ClientError::MalformedResponse(d) => d,
        }
    }
}

impl From<ClientError> for LekhaError {
    fn from(err: ClientError) -> Self {
        LekhaError::Client(err.to_string())
    }
}
