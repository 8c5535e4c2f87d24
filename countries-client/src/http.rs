//! reqwest adapter for the [`CountryTransport`] port.

use std::error::Error as _;
use std::sync::OnceLock;
use std::time::Duration;

use reqwest::header::ACCEPT;
use url::Url;

use countries_types::{CountryTransport, TransportError};

pub const DEFAULT_USER_AGENT: &str = concat!("countries-client/", env!("CARGO_PKG_VERSION"));

/// HTTP transport backed by reqwest.
///
/// The async client is built eagerly. The blocking client runs its own
/// worker thread, so it is only built on the first blocking request.
pub struct HttpTransport {
    http: reqwest::Client,
    blocking: OnceLock<reqwest::blocking::Client>,
    timeout: Option<Duration>,
    user_agent: String,
}

impl HttpTransport {
    /// Creates a transport with the given request timeout and user agent.
    pub fn new(
        timeout: Option<Duration>,
        user_agent: impl Into<String>,
    ) -> Result<Self, TransportError> {
        let user_agent = user_agent.into();
        let mut builder = reqwest::Client::builder().user_agent(user_agent.clone());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(request_error)?;
        Ok(Self {
            http,
            blocking: OnceLock::new(),
            timeout,
            user_agent,
        })
    }

    fn blocking_client(&self) -> Result<&reqwest::blocking::Client, TransportError> {
        if let Some(client) = self.blocking.get() {
            return Ok(client);
        }
        // The blocking builder defaults to a 30s timeout; `None` lifts it.
        let client = reqwest::blocking::Client::builder()
            .user_agent(self.user_agent.clone())
            .timeout(self.timeout)
            .build()
            .map_err(request_error)?;
        Ok(self.blocking.get_or_init(|| client))
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self {
            http: reqwest::Client::new(),
            blocking: OnceLock::new(),
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl CountryTransport for HttpTransport {
    async fn get(&self, url: &Url) -> Result<String, TransportError> {
        let resp = self
            .http
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(request_error)?;
        let status = resp.status();
        let body = resp.text().await.map_err(request_error)?;
        check_status(status, body)
    }

    fn get_blocking(&self, url: &Url) -> Result<String, TransportError> {
        let resp = self
            .blocking_client()?
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .map_err(request_error)?;
        let status = resp.status();
        let body = resp.text().map_err(request_error)?;
        check_status(status, body)
    }
}

fn check_status(status: reqwest::StatusCode, body: String) -> Result<String, TransportError> {
    if status.is_success() {
        return Ok(body);
    }
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or(body);
    Err(TransportError::Status {
        status: status.as_u16(),
        message,
    })
}

fn request_error(err: reqwest::Error) -> TransportError {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    TransportError::Request(message)
}
