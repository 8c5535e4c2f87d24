//! Port traits (interfaces for adapters).
//!
//! The lookup service depends on these traits, not on a concrete HTTP client.

mod transport;

pub use transport::CountryTransport;
