//! Fixed exchange-rate table for the Currency category
//!
//! There is no live rate feed. Rates come from configuration, and a currency
//! without a rate is reported as such rather than converted at some guess.

use std::collections::HashMap;
use std::path::Path;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};
use crate::ConversionError;

/// Errors loading a rate table
#[derive(Debug, Error)]
pub enum RatesError {
    #[error("cannot read rate table {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed rate table: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("rate for {code} must be a positive finite number, got {rate}")]
    InvalidRate { code: String, rate: f64 },
}

/// Exchange rates relative to a base currency.
///
/// `rates[code]` is how many units of `code` one unit of `base` buys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRates {
    pub base: String,
    #[serde(default)]
    pub rates: HashMap<String, f64>,
}

impl CurrencyRates {
    /// A table with no rates: every currency conversion is unavailable
    pub fn empty() -> Self {
        CurrencyRates {
            base: "USD".to_string(),
            rates: HashMap::new(),
        }
    }

    pub fn new(base: &str, rates: impl IntoIterator<Item = (String, f64)>) -> Result<Self, RatesError> {
        let table = CurrencyRates {
            base: base.to_uppercase(),
            rates: rates.into_iter().map(|(k, v)| (k.to_uppercase(), v)).collect(),
        };
        table.validate()?;
        Ok(table)
    }

    /// Parse `{ "base": "USD", "rates": { "EUR": 0.92, ... } }`
    pub fn from_json(json: &str) -> Result<Self, RatesError> {
        let raw: CurrencyRates = serde_json::from_str(json)?;
        Self::new(&raw.base, raw.rates)
    }

    pub fn from_path(path: &Path) -> Result<Self, RatesError> {
        let content = std::fs::read_to_string(path).map_err(|source| RatesError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let table = Self::from_json(&content)?;
        info!(path = %path.display(), base = %table.base, currencies = table.rates.len(), "loaded exchange rates");
        Ok(table)
    }

    fn validate(&self) -> Result<(), RatesError> {
        for (code, &rate) in &self.rates {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(RatesError::InvalidRate { code: code.clone(), rate });
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Units of `code` per unit of base. The base itself is always 1.
    pub fn rate(&self, code: &str) -> Option<f64> {
        let code = code.to_uppercase();
        if code == self.base {
            return Some(1.0);
        }
        self.rates.get(&code).copied()
    }

    /// Convert `value` from one currency to another through the base.
    pub fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
        let from_rate = self.rate(from).ok_or_else(|| ConversionError::RateUnavailable {
            currency: from.to_string(),
        })?;
        let to_rate = self.rate(to).ok_or_else(|| ConversionError::RateUnavailable {
            currency: to.to_string(),
        })?;
        debug!(from, to, from_rate, to_rate, "currency conversion");
        Ok(value / from_rate * to_rate)
    }
}

impl Default for CurrencyRates {
    fn default() -> Self {
        Self::empty()
    }
}
