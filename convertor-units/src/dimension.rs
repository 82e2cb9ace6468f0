//! Dimensional analysis types
//!
//! Each quantity has dimensions represented as a 9-element exponent vector:
//! [length, mass, time, current, temperature, amount, luminosity, information, currency]
//!
//! Information and currency are not SI base quantities, but giving them their
//! own slots keeps bytes and dollars from ever converting into anything else.

use std::fmt;
use serde::{Serialize, Deserialize};

/// Number of base quantities tracked
pub const BASE_COUNT: usize = 9;

/// Represents the dimensions of a quantity as exponents of the base dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimension {
    pub exponents: [i32; BASE_COUNT],
}

impl Dimension {
    pub const DIMENSIONLESS: Dimension = Dimension::new([0, 0, 0, 0, 0, 0, 0, 0, 0]);

    /// Length [L]
    pub const LENGTH: Dimension = Dimension::new([1, 0, 0, 0, 0, 0, 0, 0, 0]);

    /// Mass [M]
    pub const MASS: Dimension = Dimension::new([0, 1, 0, 0, 0, 0, 0, 0, 0]);

    /// Time [T]
    pub const TIME: Dimension = Dimension::new([0, 0, 1, 0, 0, 0, 0, 0, 0]);

    /// Electric current [I]
    pub const CURRENT: Dimension = Dimension::new([0, 0, 0, 1, 0, 0, 0, 0, 0]);

    /// Temperature [Θ]
    pub const TEMPERATURE: Dimension = Dimension::new([0, 0, 0, 0, 1, 0, 0, 0, 0]);

    /// Information [B]
    pub const INFORMATION: Dimension = Dimension::new([0, 0, 0, 0, 0, 0, 0, 1, 0]);

    /// Currency [¤]
    pub const CURRENCY: Dimension = Dimension::new([0, 0, 0, 0, 0, 0, 0, 0, 1]);

    /// Velocity [L T^-1]
    pub const VELOCITY: Dimension = Dimension::new([1, 0, -1, 0, 0, 0, 0, 0, 0]);

    /// Energy [M L^2 T^-2]; torque shares it
    pub const ENERGY: Dimension = Dimension::new([2, 1, -2, 0, 0, 0, 0, 0, 0]);

    /// Power [M L^2 T^-3]
    pub const POWER: Dimension = Dimension::new([2, 1, -3, 0, 0, 0, 0, 0, 0]);

    /// Pressure [M L^-1 T^-2]
    pub const PRESSURE: Dimension = Dimension::new([-1, 1, -2, 0, 0, 0, 0, 0, 0]);

    /// Area [L^2]
    pub const AREA: Dimension = Dimension::new([2, 0, 0, 0, 0, 0, 0, 0, 0]);

    /// Volume [L^3]
    pub const VOLUME: Dimension = Dimension::new([3, 0, 0, 0, 0, 0, 0, 0, 0]);

    /// Frequency [T^-1]
    pub const FREQUENCY: Dimension = Dimension::new([0, 0, -1, 0, 0, 0, 0, 0, 0]);

    /// Density [M L^-3]
    pub const DENSITY: Dimension = Dimension::new([-3, 1, 0, 0, 0, 0, 0, 0, 0]);

    /// Volumetric flow [L^3 T^-1]
    pub const FLOW: Dimension = Dimension::new([3, 0, -1, 0, 0, 0, 0, 0, 0]);

    /// Voltage [M L^2 T^-3 I^-1]
    pub const VOLTAGE: Dimension = Dimension::new([2, 1, -3, -1, 0, 0, 0, 0, 0]);

    /// Resistance [M L^2 T^-3 I^-2]
    pub const RESISTANCE: Dimension = Dimension::new([2, 1, -3, -2, 0, 0, 0, 0, 0]);

    /// Conductance [M^-1 L^-2 T^3 I^2]
    pub const CONDUCTANCE: Dimension = Dimension::new([-2, -1, 3, 2, 0, 0, 0, 0, 0]);

    /// Capacitance [M^-1 L^-2 T^4 I^2]
    pub const CAPACITANCE: Dimension = Dimension::new([-2, -1, 4, 2, 0, 0, 0, 0, 0]);

    /// Inductance [M L^2 T^-2 I^-2]
    pub const INDUCTANCE: Dimension = Dimension::new([2, 1, -2, -2, 0, 0, 0, 0, 0]);

    pub const fn new(exponents: [i32; BASE_COUNT]) -> Self {
        Dimension { exponents }
    }

    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(|&e| e == 0)
    }

    /// Multiply dimensions (add exponents)
    pub fn multiply(&self, other: &Dimension) -> Dimension {
        let mut result = [0i32; BASE_COUNT];
        for (i, slot) in result.iter_mut().enumerate() {
            *slot = self.exponents[i] + other.exponents[i];
        }
        Dimension { exponents: result }
    }

    /// Divide dimensions (subtract exponents)
    pub fn divide(&self, other: &Dimension) -> Dimension {
        let mut result = [0i32; BASE_COUNT];
        for (i, slot) in result.iter_mut().enumerate() {
            *slot = self.exponents[i] - other.exponents[i];
        }
        Dimension { exponents: result }
    }

    /// Get the dimension name if it matches a known dimension
    pub fn name(&self) -> Option<&'static str> {
        match *self {
            Dimension::DIMENSIONLESS => Some("dimensionless"),
            Dimension::LENGTH => Some("length"),
            Dimension::MASS => Some("mass"),
            Dimension::TIME => Some("time"),
            Dimension::CURRENT => Some("current"),
            Dimension::TEMPERATURE => Some("temperature"),
            Dimension::INFORMATION => Some("information"),
            Dimension::CURRENCY => Some("currency"),
            Dimension::VELOCITY => Some("velocity"),
            Dimension::ENERGY => Some("energy"),
            Dimension::POWER => Some("power"),
            Dimension::PRESSURE => Some("pressure"),
            Dimension::AREA => Some("area"),
            Dimension::VOLUME => Some("volume"),
            Dimension::FREQUENCY => Some("frequency"),
            Dimension::DENSITY => Some("density"),
            Dimension::FLOW => Some("volumetric flow"),
            Dimension::VOLTAGE => Some("voltage"),
            Dimension::RESISTANCE => Some("resistance"),
            Dimension::CONDUCTANCE => Some("conductance"),
            Dimension::CAPACITANCE => Some("capacitance"),
            Dimension::INDUCTANCE => Some("inductance"),
            _ => None,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = ["L", "M", "T", "I", "Θ", "N", "J", "B", "¤"];
        let mut parts = Vec::new();

        for (i, &exp) in self.exponents.iter().enumerate() {
            if exp != 0 {
                if exp == 1 {
                    parts.push(names[i].to_string());
                } else {
                    parts.push(format!("{}^{}", names[i], exp));
                }
            }
        }

        if parts.is_empty() {
            write!(f, "1")
        } else {
            write!(f, "{}", parts.join(" "))
        }
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::DIMENSIONLESS
    }
}
