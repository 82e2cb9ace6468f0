//! Server configuration from the environment
//!
//! - `CONVERTOR_RATES_PATH`: JSON exchange-rate table (optional)
//! - `CONVERTOR_THEME`: initial theme, `dark` (default) or `light`
//! - `RUST_LOG`: log filter, read by the subscriber in `main`

use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};
use convertor_session::Theme;
use convertor_units::{CurrencyRates, RatesError};

pub const RATES_PATH_VAR: &str = "CONVERTOR_RATES_PATH";
pub const THEME_VAR: &str = "CONVERTOR_THEME";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("CONVERTOR_RATES_PATH: {0}")]
    Rates(#[from] RatesError),

    #[error("CONVERTOR_THEME must be 'dark' or 'light', got '{0}'")]
    InvalidTheme(String),
}

#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    pub rates: CurrencyRates,
    pub theme: Theme,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any variable source. A bad setting is logged and replaced
    /// by its default; the server always starts.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let rates = match load_rates(lookup(RATES_PATH_VAR).as_deref()) {
            Ok(rates) => rates,
            Err(e) => {
                warn!(error = %e, "starting without exchange rates");
                CurrencyRates::empty()
            }
        };
        let theme = match parse_theme(lookup(THEME_VAR).as_deref()) {
            Ok(theme) => theme,
            Err(e) => {
                warn!(error = %e, "falling back to the default theme");
                Theme::default()
            }
        };
        info!(currencies = rates.rates.len(), %theme, "configuration loaded");
        ServerConfig { rates, theme }
    }
}

fn load_rates(path: Option<&str>) -> Result<CurrencyRates, ConfigError> {
    match path.map(str::trim).filter(|p| !p.is_empty()) {
        Some(path) => Ok(CurrencyRates::from_path(Path::new(path))?),
        None => Ok(CurrencyRates::empty()),
    }
}

fn parse_theme(value: Option<&str>) -> Result<Theme, ConfigError> {
    match value {
        None => Ok(Theme::default()),
        Some(v) => Theme::parse(v).ok_or_else(|| ConfigError::InvalidTheme(v.to_string())),
    }
}
