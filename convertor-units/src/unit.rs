//! Unit representation with conversion factors

use std::fmt;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use convertor_core::ConvertorError;
use crate::{Dimension, TemperatureScale};

/// How values in a unit relate to the base unit of its dimension
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Scale {
    /// `value_base = value * factor`
    Linear { factor: f64 },
    /// Affine scale normalized through kelvin
    Temperature { scale: TemperatureScale },
    /// Converted only through a configured exchange-rate table
    Currency,
}

/// A unit known to the registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Catalog identifier (e.g. "meters", "nautical_miles")
    pub id: String,
    /// Short symbol (e.g. "m", "nmi")
    pub symbol: String,
    /// Singular name (e.g. "meter")
    pub name: String,
    pub dimension: Dimension,
    pub scale: Scale,
    /// Catalog category name (e.g. "Length")
    pub category: String,
}

impl Unit {
    /// Create a unit with a purely linear relation to its base unit
    pub fn linear(id: &str, symbol: &str, name: &str, dimension: Dimension, factor: f64, category: &str) -> Self {
        Unit {
            id: id.to_string(),
            symbol: symbol.to_string(),
            name: name.to_string(),
            dimension,
            scale: Scale::Linear { factor },
            category: category.to_string(),
        }
    }

    pub fn temperature(scale: TemperatureScale, name: &str) -> Self {
        Unit {
            id: scale.id().to_string(),
            symbol: scale.symbol().to_string(),
            name: name.to_string(),
            dimension: Dimension::TEMPERATURE,
            scale: Scale::Temperature { scale },
            category: "Temperature".to_string(),
        }
    }

    pub fn currency(code: &str, name: &str) -> Self {
        Unit {
            id: code.to_string(),
            symbol: code.to_string(),
            name: name.to_string(),
            dimension: Dimension::CURRENCY,
            scale: Scale::Currency,
            category: "Currency".to_string(),
        }
    }

    /// Base unit of a linear dimension (factor exactly 1)
    pub fn is_base(&self) -> bool {
        match self.scale {
            Scale::Linear { factor } => factor == 1.0,
            Scale::Temperature { scale } => scale == TemperatureScale::Kelvin,
            Scale::Currency => false,
        }
    }

    /// Check if two units are dimensionally compatible (can be converted)
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.dimension == other.dimension
    }

    /// Express `value` in the base unit of this dimension.
    ///
    /// Returns `None` for currencies, whose base depends on the rate table.
    pub fn to_base(&self, value: f64) -> Option<f64> {
        match self.scale {
            Scale::Linear { factor } => Some(value * factor),
            Scale::Temperature { scale } => Some(scale.to_kelvin(value)),
            Scale::Currency => None,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// Errors that can occur during unit conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// The value is NaN or infinite
    #[error("invalid input: {0} is not a finite number")]
    InvalidInput(f64),

    /// Units belong to different dimensions or are unknown
    #[error("cannot convert {from} to {to}: incompatible or unknown units")]
    IncompatibleUnits { from: String, to: String },

    /// A finite input whose result does not fit in an f64
    #[error("converting {from} to {to} overflows")]
    OutOfRange { from: String, to: String },

    /// A currency has no entry in the configured rate table
    #[error("no exchange rate configured for {currency}")]
    RateUnavailable { currency: String },

    /// A single-unit query named nothing the registry knows
    #[error("unknown unit: {unit}")]
    UnknownUnit { unit: String },
}

impl ConversionError {
    pub fn incompatible(from: &str, to: &str) -> Self {
        ConversionError::IncompatibleUnits {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

impl From<ConversionError> for ConvertorError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::InvalidInput(v) => {
                ConvertorError::invalid_input(format!("{} is not a finite number", v))
            }
            ConversionError::IncompatibleUnits { from, to } => {
                ConvertorError::incompatible_units(&from, &to)
            }
            ConversionError::OutOfRange { from, to } => ConvertorError::out_of_range(&from, &to),
            ConversionError::RateUnavailable { currency } => {
                ConvertorError::rate_unavailable(&currency)
            }
            ConversionError::UnknownUnit { unit } => ConvertorError::unknown_unit(&unit),
        }
    }
}
