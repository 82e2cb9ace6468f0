//! Catalog functions: list_categories, search_units, unit_info, format_unit

use convertor_plugin::prelude::*;
use convertor_units::{categories, category, format_unit, search, UNITS};
use crate::values::{category_value, unit_value};
use super::args::{expect_args, text_arg};

// ============ list_categories ============

pub struct ListCategories;

static LIST_CATEGORIES_ARGS: [ArgMeta; 1] = [
    ArgMeta::optional("category", "Text", "Only this category (name or label)", "all"),
];

static LIST_CATEGORIES_EXAMPLES: [&str; 2] = [
    "list_categories() → [{name: \"Length\", units: [...]}, ...]",
    "list_categories(\"Speed\") → [{name: \"Speed\", ...}]",
];

static LIST_CATEGORIES_RELATED: [&str; 2] = ["search_units", "unit_info"];

impl FunctionPlugin for ListCategories {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "list_categories",
            description: "List unit categories with their units, in display order",
            usage: "list_categories(category?)",
            args: &LIST_CATEGORIES_ARGS,
            returns: "List<Object>",
            examples: &LIST_CATEGORIES_EXAMPLES,
            category: "catalog",
            related: &LIST_CATEGORIES_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &SessionContext) -> Value {
        match args.len() {
            0 => Value::List(categories().iter().map(category_value).collect()),
            1 => {
                let name = match text_arg("list_categories", args, 0, "category") {
                    Ok(s) => s,
                    Err(e) => return Value::Error(e),
                };
                match category(name) {
                    Some(c) => Value::List(vec![category_value(c)]),
                    None => Value::Error(ConvertorError::unknown_category(name)),
                }
            }
            n => Value::Error(ConvertorError::arg_count("list_categories", 1, n)),
        }
    }
}

// ============ search_units ============

pub struct SearchUnits;

static SEARCH_ARGS: [ArgMeta; 1] = [
    ArgMeta::required("query", "Text", "Substring of a category label or unit id"),
];

static SEARCH_EXAMPLES: [&str; 2] = [
    "search_units(\"meter\") → Length, Volume, Speed, Area, Torque, Density, Airflow",
    "search_units(\"xyz\") → []",
];

static SEARCH_RELATED: [&str; 2] = ["list_categories", "unit_info"];

impl FunctionPlugin for SearchUnits {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "search_units",
            description: "Find categories whose label or units contain the query, ignoring case",
            usage: "search_units(query)",
            args: &SEARCH_ARGS,
            returns: "List<Object>",
            examples: &SEARCH_EXAMPLES,
            category: "catalog",
            related: &SEARCH_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &SessionContext) -> Value {
        if let Err(e) = expect_args("search_units", args, 1) {
            return Value::Error(e);
        }
        let query = match text_arg("search_units", args, 0, "query") {
            Ok(s) => s,
            Err(e) => return Value::Error(e),
        };

        Value::List(search(query).into_iter().map(category_value).collect())
    }
}

// ============ unit_info ============

pub struct UnitInfo;

static UNIT_INFO_ARGS: [ArgMeta; 1] = [
    ArgMeta::required("unit", "Text", "Unit id, symbol or name"),
];

static UNIT_INFO_EXAMPLES: [&str; 2] = [
    "unit_info(\"ft\") → {id: \"feet\", category: \"Length\", base_unit: \"meters\", ...}",
    "unit_info(\"°C\") → {id: \"celsius\", base_unit: \"kelvin\", ...}",
];

static UNIT_INFO_RELATED: [&str; 2] = ["search_units", "to_base"];

impl FunctionPlugin for UnitInfo {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "unit_info",
            description: "Describe a unit: id, display name, symbol, category, dimension and base unit",
            usage: "unit_info(unit)",
            args: &UNIT_INFO_ARGS,
            returns: "Object",
            examples: &UNIT_INFO_EXAMPLES,
            category: "catalog",
            related: &UNIT_INFO_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &SessionContext) -> Value {
        if let Err(e) = expect_args("unit_info", args, 1) {
            return Value::Error(e);
        }
        let name = match text_arg("unit_info", args, 0, "unit") {
            Ok(s) => s,
            Err(e) => return Value::Error(e),
        };

        match UNITS.get(name) {
            Some(unit) => unit_value(unit),
            None => Value::Error(ConvertorError::unknown_unit(name)),
        }
    }
}

// ============ format_unit ============

pub struct FormatUnit;

static FORMAT_UNIT_ARGS: [ArgMeta; 1] = [
    ArgMeta::required("unit", "Text", "Unit identifier"),
];

static FORMAT_UNIT_EXAMPLES: [&str; 2] = [
    "format_unit(\"nautical_miles\") → \"Nautical Miles\"",
    "format_unit(\"USD\") → \"USD\"",
];

static FORMAT_UNIT_RELATED: [&str; 1] = ["unit_info"];

impl FunctionPlugin for FormatUnit {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "format_unit",
            description: "Display name of a unit identifier",
            usage: "format_unit(unit)",
            args: &FORMAT_UNIT_ARGS,
            returns: "Text",
            examples: &FORMAT_UNIT_EXAMPLES,
            category: "catalog",
            related: &FORMAT_UNIT_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &SessionContext) -> Value {
        if let Err(e) = expect_args("format_unit", args, 1) {
            return Value::Error(e);
        }
        match text_arg("format_unit", args, 0, "unit") {
            Ok(s) => Value::Text(format_unit(s)),
            Err(e) => Value::Error(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn ctx() -> SessionContext {
        SessionContext::with_defaults(Arc::new(PluginRegistry::new()))
    }

    fn text(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    #[test]
    fn test_list_categories() {
        let result = ListCategories.call(&[], &ctx());
        let list = result.as_list().unwrap();
        assert_eq!(list.len(), 17);
        assert_eq!(list[0].get("name"), text("Length"));
        assert_eq!(list[16].get("name"), text("Currency"));

        let units = list[2].get("units");
        assert_eq!(units.as_list().unwrap()[0], text("celsius"));
    }

    #[test]
    fn test_list_single_category() {
        let result = ListCategories.call(&[text("speed")], &ctx());
        assert_eq!(result.as_list().unwrap()[0].get("name"), text("Speed"));

        let result = ListCategories.call(&[text("Colors")], &ctx());
        assert_eq!(result.as_error().unwrap().code, codes::UNKNOWN_CATEGORY);
    }

    #[test]
    fn test_search_units() {
        let result = SearchUnits.call(&[text("GIGA")], &ctx());
        let names: Vec<Value> = result.as_list().unwrap().iter().map(|c| c.get("name")).collect();
        assert_eq!(names, vec![text("Data"), text("Frequency")]);

        let result = SearchUnits.call(&[text("xyz")], &ctx());
        assert_eq!(result, Value::List(vec![]));
    }

    #[test]
    fn test_unit_info() {
        let info = UnitInfo.call(&[text("ft")], &ctx());
        assert_eq!(info.get("id"), text("feet"));
        assert_eq!(info.get("category"), text("Length"));
        assert_eq!(info.get("base_unit"), text("meters"));
        assert_eq!(info.get("dimension"), text("length"));

        let info = UnitInfo.call(&[text("gigabytes")], &ctx());
        assert_eq!(info.get("base_unit"), Value::Null);

        let info = UnitInfo.call(&[text("parsecs")], &ctx());
        assert_eq!(info.as_error().unwrap().code, codes::UNKNOWN_UNIT);
    }

    #[test]
    fn test_format_unit() {
        assert_eq!(FormatUnit.call(&[text("nautical_miles")], &ctx()), text("Nautical Miles"));
        assert_eq!(FormatUnit.call(&[text("USD")], &ctx()), text("USD"));
    }
}
