//! JSON shapes returned by the upstream API and their mapping into domain
//! records.
//!
//! Two schema generations of the upstream are accepted: `name` and
//! `capital` are plain strings in one and nested in the other, and
//! `currencies` is either a list of objects or an object keyed by code.

use serde::Deserialize;
use serde_json::{Map, Value};

use countries_types::{CountryInfo, LocalCurrency, LookupError};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NameField {
    Plain(String),
    Structured { common: String },
}

impl NameField {
    fn into_string(self) -> String {
        match self {
            NameField::Plain(name) => name,
            NameField::Structured { common } => common,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CapitalField {
    Single(String),
    Many(Vec<String>),
}

#[derive(Debug, Deserialize)]
struct CurrencyBody {
    code: Option<String>,
    symbol: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CurrenciesField {
    List(Vec<CurrencyBody>),
    Keyed(Map<String, Value>),
}

#[derive(Debug, Deserialize)]
struct CountryBody {
    name: NameField,
    currencies: Option<CurrenciesField>,
}

#[derive(Debug, Deserialize)]
struct CapitalBody {
    name: NameField,
    capital: CapitalField,
    area: f64,
    population: u64,
    flag: String,
}

fn malformed(message: impl Into<String>) -> LookupError {
    let message = message.into();
    tracing::warn!(%message, "Upstream response did not match the expected shape");
    LookupError::MalformedResponse(message)
}

fn parse_json(body: &str) -> Result<Value, LookupError> {
    serde_json::from_str(body).map_err(|e| malformed(format!("invalid JSON: {}", e)))
}

/// Maps an `/alpha/{code}` body into the country's first listed currency.
pub(crate) fn parse_local_currency(body: &str) -> Result<LocalCurrency, LookupError> {
    let value = parse_json(body)?;
    if !value.is_object() {
        return Err(malformed("expected a JSON object"));
    }
    let country: CountryBody = serde_json::from_value(value)
        .map_err(|e| malformed(format!("unexpected country shape: {}", e)))?;

    let (code, currency) = match country.currencies {
        None => return Err(malformed("missing 'currencies'")),
        Some(CurrenciesField::List(list)) => {
            let first = list
                .into_iter()
                .next()
                .ok_or_else(|| malformed("'currencies' is empty"))?;
            (None, first)
        }
        Some(CurrenciesField::Keyed(map)) => {
            let (key, value) = map
                .into_iter()
                .next()
                .ok_or_else(|| malformed("'currencies' is empty"))?;
            let body: CurrencyBody = serde_json::from_value(value)
                .map_err(|e| malformed(format!("unexpected currency shape: {}", e)))?;
            (Some(key), body)
        }
    };

    let code = currency
        .code
        .or(code)
        .ok_or_else(|| malformed("currency has no 'code'"))?;
    let symbol = currency
        .symbol
        .ok_or_else(|| malformed("currency has no 'symbol'"))?;

    Ok(LocalCurrency::new(country.name.into_string(), code, symbol))
}

/// Maps a `/capital/{name}` body into the first matching country.
pub(crate) fn parse_country_info(body: &str) -> Result<CountryInfo, LookupError> {
    let value = parse_json(body)?;
    let first = match value {
        Value::Array(items) => items
            .into_iter()
            .next()
            .ok_or_else(|| malformed("no country matched the capital"))?,
        _ => return Err(malformed("expected a JSON array")),
    };
    let country: CapitalBody = serde_json::from_value(first)
        .map_err(|e| malformed(format!("unexpected country shape: {}", e)))?;

    let capital = match country.capital {
        CapitalField::Single(capital) => capital,
        CapitalField::Many(capitals) => capitals
            .into_iter()
            .next()
            .ok_or_else(|| malformed("'capital' is empty"))?,
    };

    Ok(CountryInfo {
        name: country.name.into_string(),
        capital,
        area: country.area,
        population: country.population,
        flag: country.flag,
    })
}
