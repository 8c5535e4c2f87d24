//! HTTP transport port.
//!
//! Implementations can be real HTTP clients or in-memory stubs.

use url::Url;

use crate::error::TransportError;

/// Fetches response bodies for fully built request URLs.
///
/// Implementations must be safe to share across concurrent calls and must
/// map any non-success HTTP status to [`TransportError::Status`].
#[async_trait::async_trait]
pub trait CountryTransport: Send + Sync {
    /// GET `url` without blocking the calling task.
    async fn get(&self, url: &Url) -> Result<String, TransportError>;

    /// GET `url`, occupying the calling thread until the exchange completes.
    ///
    /// Must not be called from inside an async runtime worker.
    fn get_blocking(&self, url: &Url) -> Result<String, TransportError>;
}
