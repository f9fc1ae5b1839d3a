use thiserror::Error;

/// Failures talking to the API server.
///
/// Every variant is surfaced to the caller; the client never falls back to a
/// default value.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("Request to {url} timed out")]
    Timeout { url: String },

    #[error("Could not reach {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Unexpected response body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Status { status: 404, .. })
    }

    /// Short text for the status line of the terminal UI.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Build(_) => "Client misconfigured".to_string(),
            ClientError::Timeout { .. } => "Server did not answer in time".to_string(),
            ClientError::Connect { .. } => "Server unreachable".to_string(),
            ClientError::Status { status: 404, .. } => "Counter not found".to_string(),
            ClientError::Status { status, message } => format!("Server error {status}: {message}"),
            ClientError::Decode { .. } => "Unreadable server response".to_string(),
        }
    }
}
