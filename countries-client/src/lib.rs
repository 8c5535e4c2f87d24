//! # Countries Client
//!
//! A typed Rust client for REST countries APIs.
//!
//! ```no_run
//! use countries_client::{CacheConfig, LookupService};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn run() -> Result<(), countries_client::LookupError> {
//! let service = LookupService::new("https://restcountries.com/v2")
//!     .with_cache(CacheConfig::new(64));
//! let currency = service
//!     .local_currency_by_code_async("US", &CancellationToken::new())
//!     .await?;
//! assert_eq!(currency.code, "USD");
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod config;
pub mod http;
pub mod service;
mod wire;


pub use cache::{CacheConfig, CurrencyCache};
pub use config::{ClientConfig, ConfigError};
pub use http::HttpTransport;
pub use service::LookupService;

pub use countries_types::{CountryInfo, LocalCurrency, LookupError, TransportError};
