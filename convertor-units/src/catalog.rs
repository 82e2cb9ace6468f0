//! Unit catalog: the fixed category → unit list mapping shown to users
//!
//! Category order and unit order are part of the contract; pickers list
//! them exactly as they appear here.

use serde::Serialize;

/// A category of mutually related units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnitCategory {
    /// Plain name, e.g. "Length"
    pub name: &'static str,
    /// Decorative prefix shown before the name
    pub icon: &'static str,
    /// Unit identifiers in display order
    pub units: &'static [&'static str],
}

impl UnitCategory {
    /// Name with its decorative prefix, e.g. "📏 Length"
    pub fn label(&self) -> String {
        format!("{} {}", self.icon, self.name)
    }

    pub fn contains(&self, unit: &str) -> bool {
        self.units.contains(&unit)
    }

    /// Case-insensitive substring match against the label or any unit id.
    /// `query` must already be lower-cased.
    fn matches(&self, query: &str) -> bool {
        self.label().to_lowercase().contains(query)
            || self.units.iter().any(|u| u.to_lowercase().contains(query))
    }
}

pub static CATALOG: [UnitCategory; 17] = [
    UnitCategory {
        name: "Length",
        icon: "📏",
        units: &["meters", "kilometers", "miles", "feet", "inches", "centimeters", "yards", "nautical_miles"],
    },
    UnitCategory {
        name: "Weight",
        icon: "⚖️",
        units: &["kilograms", "grams", "pounds", "ounces", "tons", "milligrams"],
    },
    UnitCategory {
        name: "Temperature",
        icon: "🌡️",
        units: &["celsius", "fahrenheit", "kelvin", "rankine"],
    },
    UnitCategory {
        name: "Time",
        icon: "⏰",
        units: &["seconds", "minutes", "hours", "days", "weeks", "months", "years"],
    },
    UnitCategory {
        name: "Volume",
        icon: "🧊",
        units: &["liters", "milliliters", "gallons", "cubic_meters", "cups", "tablespoons", "teaspoons"],
    },
    UnitCategory {
        name: "Speed",
        icon: "🚀",
        units: &["meters_per_second", "kilometers_per_hour", "miles_per_hour", "knots"],
    },
    UnitCategory {
        name: "Data",
        icon: "💾",
        units: &["bytes", "kilobytes", "megabytes", "gigabytes", "terabytes", "petabytes"],
    },
    UnitCategory {
        name: "Frequency",
        icon: "📡",
        units: &["hertz", "kilohertz", "megahertz", "gigahertz", "terahertz"],
    },
    UnitCategory {
        name: "Energy",
        icon: "🔋",
        units: &["joules", "kilojoules", "calories", "kilocalories", "watt_hours", "electron_volts"],
    },
    UnitCategory {
        name: "Power",
        icon: "⚡",
        units: &["watts", "kilowatts", "megawatts", "horsepower", "btu_per_hour"],
    },
    UnitCategory {
        name: "Area",
        icon: "📐",
        units: &["square_meters", "square_kilometers", "acres", "hectares", "square_feet", "square_yards", "square_miles"],
    },
    UnitCategory {
        name: "Pressure",
        icon: "🔩",
        units: &["pascals", "bar", "atmospheres", "psi", "torr", "millibars"],
    },
    UnitCategory {
        name: "Electrical",
        icon: "🎛️",
        units: &["volts", "amperes", "ohms", "farads", "henries", "siemens"],
    },
    UnitCategory {
        name: "Torque",
        icon: "🌀",
        units: &["newton_meters", "pound_feet", "kilogram_force_meters"],
    },
    UnitCategory {
        name: "Density",
        icon: "📉",
        units: &["kilograms_per_cubic_meter", "grams_per_cubic_centimeter", "pounds_per_cubic_foot"],
    },
    UnitCategory {
        name: "Airflow",
        icon: "💨",
        units: &["cubic_meters_per_second", "cubic_feet_per_minute", "liters_per_minute"],
    },
    UnitCategory {
        name: "Currency",
        icon: "💰",
        units: &["USD", "EUR", "GBP", "JPY", "AUD", "CAD", "CHF", "CNY"],
    },
];

/// All categories in display order
pub fn categories() -> &'static [UnitCategory] {
    &CATALOG
}

/// Find a category by plain name or full label, ignoring case
pub fn category(name: &str) -> Option<&'static UnitCategory> {
    let needle = name.trim();
    CATALOG.iter().find(|c| {
        c.name.eq_ignore_ascii_case(needle) || c.label().eq_ignore_ascii_case(needle)
    })
}

/// The category listing `unit`, if any
pub fn category_of(unit: &str) -> Option<&'static UnitCategory> {
    CATALOG.iter().find(|c| c.contains(unit))
}

/// Categories whose label or any unit id contains `query`, ignoring case.
///
/// An empty query matches everything; no match is an empty list, not an error.
pub fn search(query: &str) -> Vec<&'static UnitCategory> {
    let query = query.trim().to_lowercase();
    CATALOG.iter().filter(|c| c.matches(&query)).collect()
}

/// Display form of a unit id: underscores become spaces, words are
/// capitalized. All-caps codes such as "USD" are left alone.
pub fn format_unit(unit: &str) -> String {
    unit.split('_')
        .filter(|w| !w.is_empty())
        .map(|word| {
            if word.chars().all(|c| !c.is_lowercase()) {
                return word.to_string();
            }
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UNITS;

    #[test]
    fn test_catalog_shape() {
        assert_eq!(categories().len(), 17);
        assert_eq!(categories()[0].name, "Length");
        assert_eq!(categories()[16].name, "Currency");
        assert_eq!(categories()[2].units, &["celsius", "fahrenheit", "kelvin", "rankine"]);
    }

    #[test]
    fn test_every_catalog_unit_is_registered() {
        for cat in categories() {
            for unit in cat.units {
                let registered = UNITS.get(unit)
                    .unwrap_or_else(|| panic!("{} is missing from the registry", unit));
                assert_eq!(registered.id, *unit);
                assert_eq!(registered.category, cat.name);
            }
        }
    }

    #[test]
    fn test_units_share_a_dimension_except_electrical() {
        for cat in categories().iter().filter(|c| c.name != "Electrical") {
            let first = UNITS.get(cat.units[0]).unwrap();
            for unit in cat.units {
                assert!(UNITS.get(unit).unwrap().is_compatible(first), "{} in {}", unit, cat.name);
            }
        }
    }

    #[test]
    fn test_label() {
        assert_eq!(categories()[0].label(), "📏 Length");
    }

    #[test]
    fn test_category_lookup() {
        assert_eq!(category("length").unwrap().name, "Length");
        assert_eq!(category("🌡️ Temperature").unwrap().name, "Temperature");
        assert!(category("Luminosity").is_none());

        assert_eq!(category_of("knots").unwrap().name, "Speed");
        assert!(category_of("parsecs").is_none());
    }

    #[test]
    fn test_search_by_category_name() {
        let found = search("TEMP");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Temperature");
    }

    #[test]
    fn test_search_by_unit() {
        let names: Vec<&str> = search("meter").iter().map(|c| c.name).collect();
        // kilometers, meters_per_second, square_meters, cubic_meters, ...
        assert!(names.contains(&"Length"));
        assert!(names.contains(&"Speed"));
        assert!(names.contains(&"Area"));
        assert!(names.contains(&"Volume"));
        assert!(!names.contains(&"Weight"));
    }

    #[test]
    fn test_search_empty_and_missing() {
        assert_eq!(search("").len(), 17);
        assert!(search("zzz-no-such-unit").is_empty());
        assert_eq!(search("usd")[0].name, "Currency");
    }

    #[test]
    fn test_format_unit() {
        assert_eq!(format_unit("nautical_miles"), "Nautical Miles");
        assert_eq!(format_unit("meters_per_second"), "Meters Per Second");
        assert_eq!(format_unit("bar"), "Bar");
        assert_eq!(format_unit("USD"), "USD");
    }
}
