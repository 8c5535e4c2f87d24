//! # Countries Types
//!
//! Domain records and port traits for the country lookup client.
//! This crate has ZERO IO dependencies - only data structures,
//! input validation, and trait definitions.
//!
//! ## Architecture
//!
//! - `domain/` - Records returned by lookups and validated query inputs
//! - `ports/` - Trait definitions that transport adapters must implement
//! - `error/` - Lookup and transport error types

pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{CapitalName, CountryCode, CountryInfo, LocalCurrency};
pub use error::{LookupError, TransportError};
pub use ports::CountryTransport;
