//! Currency used locally in a country.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The first currency listed for a country.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalCurrency {
    pub country_name: String,
    /// ISO 4217 code, e.g. `USD`.
    pub code: String,
    pub symbol: String,
}

impl LocalCurrency {
    pub fn new(
        country_name: impl Into<String>,
        code: impl Into<String>,
        symbol: impl Into<String>,
    ) -> Self {
        Self {
            country_name: country_name.into(),
            code: code.into(),
            symbol: symbol.into(),
        }
    }
}

impl fmt::Display for LocalCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.country_name, self.code, self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_currency_display() {
        let currency = LocalCurrency::new("United States of America", "USD", "$");
        assert_eq!(currency.to_string(), "United States of America: USD ($)");
    }

    #[test]
    fn test_local_currency_serializes_field_names() {
        let currency = LocalCurrency::new("Japan", "JPY", "¥");
        let json = serde_json::to_value(&currency).unwrap();
        assert_eq!(json["country_name"], "Japan");
        assert_eq!(json["code"], "JPY");
        assert_eq!(json["symbol"], "¥");
    }
}
