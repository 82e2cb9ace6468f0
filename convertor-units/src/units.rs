//! Unit definitions for every catalog category
//!
//! Factors are relative to the SI-coherent base unit of each dimension
//! (meter, kilogram, second, cubic meter, bit, ...).

use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;
use crate::{Dimension, TemperatureScale, Unit};

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

// pint's definitions, which the catalog identifiers follow
const POUND: f64 = 0.45359237;
const FOOT: f64 = 0.3048;
const CUBIC_FOOT: f64 = 0.028316846592;
const US_GALLON: f64 = 0.003785411784;
const STANDARD_GRAVITY: f64 = 9.80665;
const POUND_FORCE: f64 = POUND * STANDARD_GRAVITY;
const INTERNATIONAL_BTU: f64 = 1055.05585262;
const JULIAN_YEAR: f64 = 365.25 * 86400.0;

/// Registry of all known units
pub struct UnitRegistry {
    units: HashMap<String, Unit>,
    aliases: HashMap<String, String>,
    /// Lower-cased ids and aliases; ambiguous spellings are left out
    folded: HashMap<String, Option<String>>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            units: HashMap::new(),
            aliases: HashMap::new(),
            folded: HashMap::new(),
        };
        registry.register_all_units();
        debug!(units = registry.units.len(), aliases = registry.aliases.len(), "unit registry loaded");
        registry
    }

    /// Get a unit by identifier or alias.
    ///
    /// Exact spellings win; otherwise the lookup is retried case-insensitively.
    pub fn get(&self, symbol: &str) -> Option<&Unit> {
        if let Some(unit) = self.units.get(symbol) {
            return Some(unit);
        }
        if let Some(canonical) = self.aliases.get(symbol) {
            return self.units.get(canonical);
        }
        let canonical = self.folded.get(&symbol.trim().to_lowercase())?.as_ref()?;
        self.units.get(canonical)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.get(symbol).is_some()
    }

    /// The registered unit with factor 1 for `dimension`, if any.
    /// Energy has two (joules, newton_meters); the first by id wins.
    pub fn base_unit(&self, dimension: Dimension) -> Option<&Unit> {
        self.units.values()
            .filter(|u| u.dimension == dimension && u.is_base())
            .min_by(|a, b| a.id.cmp(&b.id))
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    fn register(&mut self, unit: Unit, aliases: &[&str]) {
        let id = unit.id.clone();
        self.fold(&id, &id);
        self.fold(&unit.symbol.clone(), &id);
        if unit.symbol != id {
            self.aliases.insert(unit.symbol.clone(), id.clone());
        }
        for alias in aliases {
            self.aliases.insert(alias.to_string(), id.clone());
            self.fold(alias, &id);
        }
        self.units.insert(id, unit);
    }

    fn fold(&mut self, spelling: &str, id: &str) {
        let key = spelling.to_lowercase();
        match self.folded.get(&key) {
            Some(Some(existing)) if existing != id => {
                self.folded.insert(key, None);
            }
            Some(_) => {}
            None => {
                self.folded.insert(key, Some(id.to_string()));
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn linear(
        &mut self,
        category: &str,
        dimension: Dimension,
        id: &str,
        symbol: &str,
        name: &str,
        factor: f64,
        aliases: &[&str],
    ) {
        self.register(Unit::linear(id, symbol, name, dimension, factor, category), aliases);
    }

    fn register_all_units(&mut self) {
        self.register_length_units();
        self.register_weight_units();
        self.register_temperature_units();
        self.register_time_units();
        self.register_volume_units();
        self.register_speed_units();
        self.register_data_units();
        self.register_frequency_units();
        self.register_energy_units();
        self.register_power_units();
        self.register_area_units();
        self.register_pressure_units();
        self.register_electrical_units();
        self.register_torque_units();
        self.register_density_units();
        self.register_airflow_units();
        self.register_currency_units();
    }

    fn register_length_units(&mut self) {
        let (c, d) = ("Length", Dimension::LENGTH);
        self.linear(c, d, "meters", "m", "meter", 1.0, &["meter", "metre", "metres"]);
        self.linear(c, d, "kilometers", "km", "kilometer", 1000.0, &["kilometer", "kilometre", "kilometres"]);
        self.linear(c, d, "miles", "mi", "mile", 1609.344, &["mile"]);
        self.linear(c, d, "feet", "ft", "foot", FOOT, &["foot"]);
        self.linear(c, d, "inches", "in", "inch", 0.0254, &["inch"]);
        self.linear(c, d, "centimeters", "cm", "centimeter", 0.01, &["centimeter", "centimetre", "centimetres"]);
        self.linear(c, d, "yards", "yd", "yard", 0.9144, &["yard"]);
        self.linear(c, d, "nautical_miles", "nmi", "nautical mile", 1852.0, &["nautical_mile"]);
    }

    fn register_weight_units(&mut self) {
        let (c, d) = ("Weight", Dimension::MASS);
        self.linear(c, d, "kilograms", "kg", "kilogram", 1.0, &["kilogram"]);
        self.linear(c, d, "grams", "g", "gram", 0.001, &["gram"]);
        self.linear(c, d, "pounds", "lb", "pound", POUND, &["pound", "lbs"]);
        self.linear(c, d, "ounces", "oz", "ounce", POUND / 16.0, &["ounce"]);
        // pint's "ton" is the US short ton
        self.linear(c, d, "tons", "ton", "short ton", 2000.0 * POUND, &["short_ton"]);
        self.linear(c, d, "milligrams", "mg", "milligram", 1e-6, &["milligram"]);
    }

    fn register_temperature_units(&mut self) {
        self.register(Unit::temperature(TemperatureScale::Celsius, "degree Celsius"), &["degC", "°C"]);
        self.register(Unit::temperature(TemperatureScale::Fahrenheit, "degree Fahrenheit"), &["degF", "°F"]);
        self.register(Unit::temperature(TemperatureScale::Kelvin, "kelvin"), &[]);
        self.register(Unit::temperature(TemperatureScale::Rankine, "degree Rankine"), &["degR", "°R"]);
    }

    fn register_time_units(&mut self) {
        let (c, d) = ("Time", Dimension::TIME);
        self.linear(c, d, "seconds", "s", "second", 1.0, &["second", "sec"]);
        self.linear(c, d, "minutes", "min", "minute", 60.0, &["minute"]);
        self.linear(c, d, "hours", "h", "hour", 3600.0, &["hour", "hr"]);
        self.linear(c, d, "days", "d", "day", 86400.0, &["day"]);
        self.linear(c, d, "weeks", "wk", "week", 604800.0, &["week"]);
        self.linear(c, d, "months", "mo", "month", JULIAN_YEAR / 12.0, &["month"]);
        self.linear(c, d, "years", "yr", "year", JULIAN_YEAR, &["year"]);
    }

    fn register_volume_units(&mut self) {
        let (c, d) = ("Volume", Dimension::VOLUME);
        self.linear(c, d, "liters", "L", "liter", 0.001, &["liter", "litre", "litres"]);
        self.linear(c, d, "milliliters", "mL", "milliliter", 1e-6, &["milliliter", "millilitre"]);
        self.linear(c, d, "gallons", "gal", "US gallon", US_GALLON, &["gallon"]);
        self.linear(c, d, "cubic_meters", "m3", "cubic meter", 1.0, &["cubic_meter", "m³"]);
        self.linear(c, d, "cups", "cup", "US cup", US_GALLON / 16.0, &[]);
        self.linear(c, d, "tablespoons", "tbsp", "tablespoon", US_GALLON / 256.0, &["tablespoon"]);
        self.linear(c, d, "teaspoons", "tsp", "teaspoon", US_GALLON / 768.0, &["teaspoon"]);
    }

    fn register_speed_units(&mut self) {
        let (c, d) = ("Speed", Dimension::VELOCITY);
        self.linear(c, d, "meters_per_second", "m/s", "meter per second", 1.0, &["mps"]);
        self.linear(c, d, "kilometers_per_hour", "km/h", "kilometer per hour", 1000.0 / 3600.0, &["kph", "kmh"]);
        self.linear(c, d, "miles_per_hour", "mph", "mile per hour", 1609.344 / 3600.0, &[]);
        self.linear(c, d, "knots", "kn", "knot", 1852.0 / 3600.0, &["knot", "kt"]);
    }

    fn register_data_units(&mut self) {
        // Base is the bit; decimal prefixes as in pint
        let (c, d) = ("Data", Dimension::INFORMATION);
        self.linear(c, d, "bytes", "B", "byte", 8.0, &["byte"]);
        self.linear(c, d, "kilobytes", "kB", "kilobyte", 8e3, &["kilobyte"]);
        self.linear(c, d, "megabytes", "MB", "megabyte", 8e6, &["megabyte"]);
        self.linear(c, d, "gigabytes", "GB", "gigabyte", 8e9, &["gigabyte"]);
        self.linear(c, d, "terabytes", "TB", "terabyte", 8e12, &["terabyte"]);
        self.linear(c, d, "petabytes", "PB", "petabyte", 8e15, &["petabyte"]);
    }

    fn register_frequency_units(&mut self) {
        let (c, d) = ("Frequency", Dimension::FREQUENCY);
        self.linear(c, d, "hertz", "Hz", "hertz", 1.0, &[]);
        self.linear(c, d, "kilohertz", "kHz", "kilohertz", 1e3, &[]);
        self.linear(c, d, "megahertz", "MHz", "megahertz", 1e6, &[]);
        self.linear(c, d, "gigahertz", "GHz", "gigahertz", 1e9, &[]);
        self.linear(c, d, "terahertz", "THz", "terahertz", 1e12, &[]);
    }

    fn register_energy_units(&mut self) {
        let (c, d) = ("Energy", Dimension::ENERGY);
        self.linear(c, d, "joules", "J", "joule", 1.0, &["joule"]);
        self.linear(c, d, "kilojoules", "kJ", "kilojoule", 1e3, &["kilojoule"]);
        self.linear(c, d, "calories", "cal", "calorie", 4.184, &["calorie"]);
        self.linear(c, d, "kilocalories", "kcal", "kilocalorie", 4184.0, &["kilocalorie"]);
        self.linear(c, d, "watt_hours", "Wh", "watt-hour", 3600.0, &["watt_hour"]);
        self.linear(c, d, "electron_volts", "eV", "electronvolt", 1.602176634e-19, &["electron_volt"]);
    }

    fn register_power_units(&mut self) {
        let (c, d) = ("Power", Dimension::POWER);
        self.linear(c, d, "watts", "W", "watt", 1.0, &["watt"]);
        self.linear(c, d, "kilowatts", "kW", "kilowatt", 1e3, &["kilowatt"]);
        self.linear(c, d, "megawatts", "MW", "megawatt", 1e6, &["megawatt"]);
        // Mechanical horsepower: 550 ft·lbf/s
        self.linear(c, d, "horsepower", "hp", "horsepower", 550.0 * FOOT * POUND_FORCE, &[]);
        self.linear(c, d, "btu_per_hour", "BTU/h", "BTU per hour", INTERNATIONAL_BTU / 3600.0, &[]);
    }

    fn register_area_units(&mut self) {
        let (c, d) = ("Area", Dimension::AREA);
        self.linear(c, d, "square_meters", "m2", "square meter", 1.0, &["square_meter", "m²"]);
        self.linear(c, d, "square_kilometers", "km2", "square kilometer", 1e6, &["square_kilometer", "km²"]);
        self.linear(c, d, "acres", "ac", "acre", 4046.8564224, &["acre"]);
        self.linear(c, d, "hectares", "ha", "hectare", 1e4, &["hectare"]);
        self.linear(c, d, "square_feet", "ft2", "square foot", FOOT * FOOT, &["square_foot", "ft²"]);
        self.linear(c, d, "square_yards", "yd2", "square yard", 0.83612736, &["square_yard", "yd²"]);
        self.linear(c, d, "square_miles", "mi2", "square mile", 1609.344 * 1609.344, &["square_mile", "mi²"]);
    }

    fn register_pressure_units(&mut self) {
        let (c, d) = ("Pressure", Dimension::PRESSURE);
        self.linear(c, d, "pascals", "Pa", "pascal", 1.0, &["pascal"]);
        self.linear(c, d, "bar", "bar", "bar", 1e5, &["bars"]);
        self.linear(c, d, "atmospheres", "atm", "standard atmosphere", 101325.0, &["atmosphere"]);
        self.linear(c, d, "psi", "psi", "pound-force per square inch", POUND_FORCE / (0.0254 * 0.0254), &[]);
        self.linear(c, d, "torr", "Torr", "torr", 101325.0 / 760.0, &[]);
        self.linear(c, d, "millibars", "mbar", "millibar", 100.0, &["millibar"]);
    }

    fn register_electrical_units(&mut self) {
        // One category, six different dimensions
        let c = "Electrical";
        self.linear(c, Dimension::VOLTAGE, "volts", "V", "volt", 1.0, &["volt"]);
        self.linear(c, Dimension::CURRENT, "amperes", "A", "ampere", 1.0, &["ampere", "amp", "amps"]);
        self.linear(c, Dimension::RESISTANCE, "ohms", "Ω", "ohm", 1.0, &["ohm"]);
        self.linear(c, Dimension::CAPACITANCE, "farads", "F", "farad", 1.0, &["farad"]);
        self.linear(c, Dimension::INDUCTANCE, "henries", "H", "henry", 1.0, &["henry"]);
        self.linear(c, Dimension::CONDUCTANCE, "siemens", "S", "siemens", 1.0, &[]);
    }

    fn register_torque_units(&mut self) {
        let (c, d) = ("Torque", Dimension::ENERGY);
        self.linear(c, d, "newton_meters", "N·m", "newton meter", 1.0, &["newton_meter", "Nm"]);
        self.linear(c, d, "pound_feet", "lbf·ft", "pound-foot", POUND_FORCE * FOOT, &["pound_foot", "lbft"]);
        self.linear(c, d, "kilogram_force_meters", "kgf·m", "kilogram-force meter", STANDARD_GRAVITY, &["kilogram_force_meter", "kgfm"]);
    }

    fn register_density_units(&mut self) {
        let (c, d) = ("Density", Dimension::DENSITY);
        self.linear(c, d, "kilograms_per_cubic_meter", "kg/m³", "kilogram per cubic meter", 1.0, &["kg/m3"]);
        self.linear(c, d, "grams_per_cubic_centimeter", "g/cm³", "gram per cubic centimeter", 1000.0, &["g/cm3", "g/cc"]);
        self.linear(c, d, "pounds_per_cubic_foot", "lb/ft³", "pound per cubic foot", POUND / CUBIC_FOOT, &["lb/ft3"]);
    }

    fn register_airflow_units(&mut self) {
        let (c, d) = ("Airflow", Dimension::FLOW);
        self.linear(c, d, "cubic_meters_per_second", "m³/s", "cubic meter per second", 1.0, &["m3/s"]);
        self.linear(c, d, "cubic_feet_per_minute", "cfm", "cubic foot per minute", CUBIC_FOOT / 60.0, &["ft3/min"]);
        self.linear(c, d, "liters_per_minute", "L/min", "liter per minute", 0.001 / 60.0, &["lpm"]);
    }

    fn register_currency_units(&mut self) {
        self.register(Unit::currency("USD", "US dollar"), &[]);
        self.register(Unit::currency("EUR", "euro"), &[]);
        self.register(Unit::currency("GBP", "pound sterling"), &[]);
        self.register(Unit::currency("JPY", "Japanese yen"), &[]);
        self.register(Unit::currency("AUD", "Australian dollar"), &[]);
        self.register(Unit::currency("CAD", "Canadian dollar"), &[]);
        self.register(Unit::currency("CHF", "Swiss franc"), &[]);
        self.register(Unit::currency("CNY", "Chinese yuan"), &[]);
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}
