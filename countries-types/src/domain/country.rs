//! General country information keyed by capital.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryInfo {
    pub name: String,
    pub capital: String,
    /// Square kilometres.
    pub area: f64,
    pub population: u64,
    /// Flag image URL or emoji, depending on the upstream schema.
    pub flag: String,
}

impl fmt::Display for CountryInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (capital {}): {} km², population {}",
            self.name, self.capital, self.area, self.population
        )
    }
}
