//! Error types for country lookups.

/// Failures reaching the remote API.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Connection, timeout, or body read failure.
    #[error("Request failed: {0}")]
    Request(String),

    #[error("HTTP error: {status} - {message}")]
    Status { status: u16, message: String },
}

impl TransportError {
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            TransportError::Request(_) => None,
        }
    }
}

/// Errors returned by every lookup operation.
///
/// `InvalidArgument` is always raised before any I/O. The remaining kinds
/// come from the exchange itself and are never retried internally.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Remote service unavailable: {0}")]
    RemoteUnavailable(#[from] TransportError),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Lookup cancelled")]
    Cancelled,

    #[error("Unknown failure: {context}")]
    UnknownFailure {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl LookupError {
    pub fn unknown(
        context: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        LookupError::UnknownFailure {
            context: context.into(),
            source: source.into(),
        }
    }

    /// Whether a caller-side retry has a chance of succeeding.
    pub fn is_retryable(&self) -> bool {
        match self {
            LookupError::RemoteUnavailable(TransportError::Request(_)) => true,
            LookupError::RemoteUnavailable(TransportError::Status { status, .. }) => {
                *status == 429 || *status >= 500
            }
            _ => false,
        }
    }
}
