//! Convertor Units - unit catalog and conversion engine
//!
//! Seventeen categories of everyday units:
//! - Length, Weight, Time, Volume, Area, Speed
//! - Temperature (celsius, fahrenheit, kelvin, rankine) via kelvin
//! - Data, Frequency, Energy, Power, Pressure, Torque, Density, Airflow
//! - Electrical (volts, amperes, ohms, farads, henries, siemens)
//! - Currency, against a configured fixed-rate table
//!
//! Units convert only within a dimension. Everything else is an error value,
//! never a guess.

mod dimension;
mod unit;
mod temperature;
mod units;
mod catalog;
mod currency;
mod convert;

pub use dimension::Dimension;
pub use unit::{Unit, Scale, ConversionError};
pub use temperature::TemperatureScale;
pub use units::{UnitRegistry, UNITS};
pub use catalog::{UnitCategory, CATALOG, categories, category, category_of, search, format_unit};
pub use currency::{CurrencyRates, RatesError};
pub use convert::{Converter, convert, formula};
