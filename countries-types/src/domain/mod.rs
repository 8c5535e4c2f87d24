//! Domain models for country lookups.

pub mod country;
pub mod currency;
pub mod query;

pub use country::CountryInfo;
pub use currency::LocalCurrency;
pub use query::{CapitalName, CountryCode};
