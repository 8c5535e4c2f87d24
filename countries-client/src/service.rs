//! Lookup Service
//!
//! Both flows run through the same pipeline: validate the argument, consult
//! the currency cache, build the request URL, fetch, map the JSON body, and
//! record the result. Only the fetch step differs between the blocking and
//! async forms.

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use url::Url;

use countries_types::{
    CapitalName, CountryCode, CountryInfo, CountryTransport, LocalCurrency, LookupError,
};

use crate::cache::{CacheConfig, CurrencyCache};
use crate::config::ClientConfig;
use crate::http::HttpTransport;
use crate::wire;

/// What the currency flow needs after the cache has been consulted.
enum CurrencyPlan {
    Cached(LocalCurrency),
    Fetch { code: CountryCode, url: Url },
}

/// Country lookups against a REST countries API.
///
/// Generic over `T: CountryTransport` so the HTTP adapter can be swapped
/// for a stub in tests.
pub struct LookupService<T: CountryTransport = HttpTransport> {
    base_url: String,
    transport: T,
    cache: Option<CurrencyCache>,
}

impl LookupService<HttpTransport> {
    /// Creates a service with a default reqwest transport and no cache.
    ///
    /// The base URL is not checked until the first lookup.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_transport(base_url, HttpTransport::default())
    }

    /// Creates a service from loaded configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self, LookupError> {
        let transport = HttpTransport::new(config.timeout, config.user_agent.clone())
            .map_err(|e| LookupError::unknown("building HTTP client", e))?;
        let service = Self::with_transport(config.base_url.clone(), transport);
        Ok(match config.cache {
            Some(cache) => service.with_cache(cache),
            None => service,
        })
    }
}

impl<T: CountryTransport> LookupService<T> {
    /// Creates a service over the given transport.
    pub fn with_transport(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
            cache: None,
        }
    }

    /// Enables the currency cache. A zero capacity leaves it disabled.
    pub fn with_cache(mut self, config: CacheConfig) -> Self {
        self.cache = CurrencyCache::new(config);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns a reference to the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn cache(&self) -> Option<&CurrencyCache> {
        self.cache.as_ref()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Currency Lookups
    // ─────────────────────────────────────────────────────────────────────────────

    /// Gets the first listed currency of the country with the given alpha-2
    /// or alpha-3 code, blocking the calling thread.
    pub fn local_currency_by_code(&self, code: &str) -> Result<LocalCurrency, LookupError> {
        match self.plan_currency(code)? {
            CurrencyPlan::Cached(currency) => Ok(currency),
            CurrencyPlan::Fetch { code, url } => {
                let body = self.transport.get_blocking(&url)?;
                self.complete_currency(&code, &body)
            }
        }
    }

    /// Async form of [`Self::local_currency_by_code`].
    ///
    /// Returns [`LookupError::Cancelled`] if `cancel` fires before the
    /// exchange completes.
    pub async fn local_currency_by_code_async(
        &self,
        code: &str,
        cancel: &CancellationToken,
    ) -> Result<LocalCurrency, LookupError> {
        match self.plan_currency(code)? {
            CurrencyPlan::Cached(currency) => Ok(currency),
            CurrencyPlan::Fetch { code, url } => {
                let body = self.fetch(&url, cancel).await?;
                self.complete_currency(&code, &body)
            }
        }
    }

    fn plan_currency(&self, raw: &str) -> Result<CurrencyPlan, LookupError> {
        let code = CountryCode::parse(raw)?;
        if let Some(currency) = self.cache.as_ref().and_then(|cache| cache.get(&code)) {
            debug!(code = %code, "Currency cache hit");
            return Ok(CurrencyPlan::Cached(currency));
        }
        let url = self.endpoint("alpha", code.as_str())?;
        Ok(CurrencyPlan::Fetch { code, url })
    }

    fn complete_currency(
        &self,
        code: &CountryCode,
        body: &str,
    ) -> Result<LocalCurrency, LookupError> {
        let currency = wire::parse_local_currency(body)?;
        info!(code = %code, currency = %currency.code, "Resolved local currency");
        if let Some(cache) = &self.cache {
            cache.insert(code, currency.clone());
        }
        Ok(currency)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Country Info Lookups
    // ─────────────────────────────────────────────────────────────────────────────

    /// Gets general information about the country with the given capital,
    /// blocking the calling thread. Not cached.
    pub fn country_info_by_capital(&self, capital: &str) -> Result<CountryInfo, LookupError> {
        let url = self.plan_capital(capital)?;
        let body = self.transport.get_blocking(&url)?;
        wire::parse_country_info(&body)
    }

    /// Async form of [`Self::country_info_by_capital`].
    pub async fn country_info_by_capital_async(
        &self,
        capital: &str,
        cancel: &CancellationToken,
    ) -> Result<CountryInfo, LookupError> {
        let url = self.plan_capital(capital)?;
        let body = self.fetch(&url, cancel).await?;
        wire::parse_country_info(&body)
    }

    fn plan_capital(&self, raw: &str) -> Result<Url, LookupError> {
        let capital = CapitalName::parse(raw)?;
        self.endpoint("capital", capital.as_str())
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Shared Helpers
    // ─────────────────────────────────────────────────────────────────────────────

    fn endpoint(&self, resource: &str, segment: &str) -> Result<Url, LookupError> {
        let raw = format!(
            "{}/{}/{}",
            self.base_url,
            resource,
            urlencoding::encode(segment)
        );
        let url = Url::parse(&raw)
            .map_err(|e| LookupError::unknown(format!("building request URL '{}'", raw), e))?;
        debug!(%url, "Requesting");
        Ok(url)
    }

    async fn fetch(&self, url: &Url, cancel: &CancellationToken) -> Result<String, LookupError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!(%url, "Lookup cancelled");
                Err(LookupError::Cancelled)
            }
            body = self.transport.get(url) => Ok(body?),
        }
    }
}
