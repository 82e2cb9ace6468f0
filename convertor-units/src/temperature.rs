//! Temperature scales
//!
//! Temperature is the one affine family in the catalog. Every scale is
//! normalized to kelvin and denormalized from it.

use std::fmt;
use serde::{Serialize, Deserialize};

/// Offset between the Celsius and Kelvin zero points
pub const CELSIUS_OFFSET: f64 = 273.15;

/// Offset between the Fahrenheit and Rankine zero points
pub const FAHRENHEIT_OFFSET: f64 = 459.67;

/// A temperature scale known to the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
    Rankine,
}

impl TemperatureScale {
    pub const ALL: [TemperatureScale; 4] = [
        TemperatureScale::Celsius,
        TemperatureScale::Fahrenheit,
        TemperatureScale::Kelvin,
        TemperatureScale::Rankine,
    ];

    /// Catalog identifier of this scale
    pub fn id(&self) -> &'static str {
        match self {
            TemperatureScale::Celsius => "celsius",
            TemperatureScale::Fahrenheit => "fahrenheit",
            TemperatureScale::Kelvin => "kelvin",
            TemperatureScale::Rankine => "rankine",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureScale::Celsius => "°C",
            TemperatureScale::Fahrenheit => "°F",
            TemperatureScale::Kelvin => "K",
            TemperatureScale::Rankine => "°R",
        }
    }

    /// Normalize a reading on this scale to kelvin
    pub fn to_kelvin(&self, value: f64) -> f64 {
        match self {
            TemperatureScale::Celsius => value + CELSIUS_OFFSET,
            TemperatureScale::Fahrenheit => (value + FAHRENHEIT_OFFSET) * 5.0 / 9.0,
            TemperatureScale::Rankine => value * 5.0 / 9.0,
            TemperatureScale::Kelvin => value,
        }
    }

    /// Express a kelvin value on this scale
    pub fn from_kelvin(&self, kelvin: f64) -> f64 {
        match self {
            TemperatureScale::Celsius => kelvin - CELSIUS_OFFSET,
            TemperatureScale::Fahrenheit => kelvin * 9.0 / 5.0 - FAHRENHEIT_OFFSET,
            TemperatureScale::Rankine => kelvin * 9.0 / 5.0,
            TemperatureScale::Kelvin => kelvin,
        }
    }

    /// Convert a reading from this scale to `target`
    pub fn convert(&self, value: f64, target: TemperatureScale) -> f64 {
        target.from_kelvin(self.to_kelvin(value))
    }
}

impl fmt::Display for TemperatureScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_fixed_points() {
        use TemperatureScale::*;

        assert_abs_diff_eq!(Celsius.convert(0.0, Fahrenheit), 32.0, epsilon = 1e-9);
        assert_abs_diff_eq!(Celsius.convert(100.0, Kelvin), 373.15, epsilon = 1e-9);
        assert_abs_diff_eq!(Fahrenheit.convert(32.0, Celsius), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(Fahrenheit.convert(212.0, Celsius), 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(Celsius.convert(-40.0, Fahrenheit), -40.0, epsilon = 1e-9);
    }

    #[test]
    fn test_absolute_zero() {
        use TemperatureScale::*;

        assert_abs_diff_eq!(Kelvin.convert(0.0, Celsius), -273.15, epsilon = 1e-9);
        assert_abs_diff_eq!(Kelvin.convert(0.0, Fahrenheit), -459.67, epsilon = 1e-9);
        assert_abs_diff_eq!(Kelvin.convert(0.0, Rankine), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rankine_tracks_fahrenheit_steps() {
        use TemperatureScale::*;

        let r0 = Fahrenheit.convert(0.0, Rankine);
        let r1 = Fahrenheit.convert(1.0, Rankine);
        assert_abs_diff_eq!(r0, 459.67, epsilon = 1e-9);
        assert_abs_diff_eq!(r1 - r0, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_identity_for_every_scale() {
        for scale in TemperatureScale::ALL {
            assert_abs_diff_eq!(scale.convert(21.5, scale), 21.5, epsilon = 1e-9);
        }
    }
}
