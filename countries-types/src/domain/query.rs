//! Validated lookup inputs.
//!
//! Raw strings never reach the network: both flows parse their argument
//! into one of these types first, so a bad argument is reported before
//! any request is built.

use std::fmt;
use std::str::FromStr;

use crate::error::LookupError;

/// Rejected outright regardless of flow.
const REJECTED_VALUE: &str = "UPSS";

fn validate<'a>(raw: &'a str, what: &str) -> Result<&'a str, LookupError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LookupError::InvalidArgument(format!(
            "{} cannot be empty",
            what
        )));
    }
    if trimmed == REJECTED_VALUE {
        return Err(LookupError::InvalidArgument(format!(
            "{} '{}' is not accepted",
            what, trimmed
        )));
    }
    Ok(trimmed)
}

/// ISO 3166-1 alpha-2 or alpha-3 code, trimmed and upper-cased.
///
/// The normalized form doubles as the currency cache key, so `us`, ` US `
/// and `US` all address the same entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CountryCode(String);

impl CountryCode {
    pub fn parse(raw: &str) -> Result<Self, LookupError> {
        validate(raw, "Country code").map(|code| Self(code.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CountryCode {
    type Err = LookupError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Capital city name, trimmed. Case is left alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CapitalName(String);

impl CapitalName {
    pub fn parse(raw: &str) -> Result<Self, LookupError> {
        validate(raw, "Capital name").map(|name| Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CapitalName {
    type Err = LookupError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CapitalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
