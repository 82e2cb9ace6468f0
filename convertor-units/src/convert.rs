//! The conversion engine
//!
//! Temperature goes through kelvin, physical units through the base unit of
//! their dimension, currencies through the configured rate table.

use tracing::debug;
use crate::currency::CurrencyRates;
use crate::unit::{ConversionError, Scale, Unit};
use crate::units::UNITS;

/// Converts values between registered units
#[derive(Debug, Clone, Default)]
pub struct Converter {
    rates: CurrencyRates,
}

impl Converter {
    /// An engine with no exchange rates
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rates(rates: CurrencyRates) -> Self {
        Converter { rates }
    }

    pub fn rates(&self) -> &CurrencyRates {
        &self.rates
    }

    /// Convert `value` from one unit to another.
    ///
    /// Non-finite input is rejected before the units are looked at. Unknown
    /// identifiers and cross-dimension pairs are both `IncompatibleUnits`.
    /// A result that overflows is `OutOfRange`, never `Ok(inf)`.
    pub fn convert(&self, value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
        if !value.is_finite() {
            return Err(ConversionError::InvalidInput(value));
        }

        let (from_unit, to_unit) = match (UNITS.get(from), UNITS.get(to)) {
            (Some(f), Some(t)) if f.is_compatible(t) => (f, t),
            _ => return Err(ConversionError::incompatible(from, to)),
        };

        let result = self.convert_units(value, from_unit, to_unit)?;
        if !result.is_finite() {
            return Err(ConversionError::OutOfRange {
                from: from_unit.id.clone(),
                to: to_unit.id.clone(),
            });
        }
        debug!(value, from = %from_unit.id, to = %to_unit.id, result, "converted");
        Ok(result)
    }

    fn convert_units(&self, value: f64, from: &Unit, to: &Unit) -> Result<f64, ConversionError> {
        if from.id == to.id {
            return Ok(value);
        }
        match (from.scale, to.scale) {
            (Scale::Temperature { scale: f }, Scale::Temperature { scale: t }) => Ok(f.convert(value, t)),
            (Scale::Linear { factor: f }, Scale::Linear { factor: t }) => Ok(value * (f / t)),
            (Scale::Currency, Scale::Currency) => self.rates.convert(value, &from.id, &to.id),
            _ => Err(ConversionError::incompatible(&from.id, &to.id)),
        }
    }

    /// Whether both identifiers resolve and share a dimension
    pub fn compatible(&self, a: &str, b: &str) -> bool {
        match (UNITS.get(a), UNITS.get(b)) {
            (Some(a), Some(b)) => a.is_compatible(b),
            _ => false,
        }
    }

    /// Express `value` in the base unit of its dimension: kelvin for
    /// temperature, the rate table's base for currency.
    pub fn to_base(&self, value: f64, unit: &str) -> Result<f64, ConversionError> {
        if !value.is_finite() {
            return Err(ConversionError::InvalidInput(value));
        }
        let unit = UNITS.get(unit).ok_or_else(|| ConversionError::UnknownUnit {
            unit: unit.to_string(),
        })?;
        let base = match unit.to_base(value) {
            Some(base) => base,
            None => self.rates.convert(value, &unit.id, &self.rates.base)?,
        };
        if !base.is_finite() {
            return Err(ConversionError::OutOfRange {
                from: unit.id.clone(),
                to: "base unit".to_string(),
            });
        }
        Ok(base)
    }
}

/// Convert with the default engine, which has no exchange rates
pub fn convert(value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    Converter::new().convert(value, from, to)
}

/// Human-readable formula for the documented temperature pairs
pub fn formula(from: &str, to: &str) -> Option<&'static str> {
    let from = UNITS.get(from)?;
    let to = UNITS.get(to)?;
    match (from.id.as_str(), to.id.as_str()) {
        ("celsius", "fahrenheit") => Some("°F = (°C × 9/5) + 32"),
        ("fahrenheit", "celsius") => Some("°C = (°F - 32) × 5/9"),
        ("celsius", "kelvin") => Some("K = °C + 273.15"),
        ("kelvin", "celsius") => Some("°C = K - 273.15"),
        _ => None,
    }
}
