//! Conversion functions: convert, to_base, compatible, formula

use convertor_plugin::prelude::*;
use convertor_units::formula;
use super::args::{expect_args, number_arg, text_arg};

// ============ convert ============

pub struct Convert;

static CONVERT_ARGS: [ArgMeta; 3] = [
    ArgMeta::required("value", "Number", "Value to convert"),
    ArgMeta::required("from_unit", "Text", "Source unit (e.g., \"kilometers\" or \"km\")"),
    ArgMeta::required("to_unit", "Text", "Target unit (e.g., \"miles\")"),
];

static CONVERT_EXAMPLES: [&str; 3] = [
    "convert(100, \"kilometers\", \"miles\") → 62.1371",
    "convert(0, \"celsius\", \"fahrenheit\") → 32",
    "convert(1, \"gigabytes\", \"megabytes\") → 1000",
];

static CONVERT_RELATED: [&str; 3] = ["to_base", "compatible", "convert_and_record"];

impl FunctionPlugin for Convert {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "convert",
            description: "Convert a value from one unit to another without recording it",
            usage: "convert(value, from_unit, to_unit)",
            args: &CONVERT_ARGS,
            returns: "Number",
            examples: &CONVERT_EXAMPLES,
            category: "conversion",
            related: &CONVERT_RELATED,
        }
    }

    fn call(&self, args: &[Value], ctx: &SessionContext) -> Value {
        if let Err(e) = expect_args("convert", args, 3) {
            return Value::Error(e);
        }
        let value = match number_arg("convert", args, 0, "value") {
            Ok(v) => v,
            Err(e) => return Value::Error(e),
        };
        let from = match text_arg("convert", args, 1, "from_unit") {
            Ok(s) => s,
            Err(e) => return Value::Error(e),
        };
        let to = match text_arg("convert", args, 2, "to_unit") {
            Ok(s) => s,
            Err(e) => return Value::Error(e),
        };

        match ctx.engine().convert(value, from, to) {
            Ok(result) => Value::Number(result),
            Err(e) => Value::Error(e.into()),
        }
    }
}

// ============ to_base ============

pub struct ToBase;

static TO_BASE_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("value", "Number", "Value to convert"),
    ArgMeta::required("unit", "Text", "Source unit"),
];

static TO_BASE_EXAMPLES: [&str; 3] = [
    "to_base(5, \"kilometers\") → 5000",
    "to_base(100, \"celsius\") → 373.15",
    "to_base(1, \"bytes\") → 8",
];

static TO_BASE_RELATED: [&str; 2] = ["convert", "unit_info"];

impl FunctionPlugin for ToBase {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "to_base",
            description: "Express a value in the base unit of its dimension (kelvin for temperature, bits for data)",
            usage: "to_base(value, unit)",
            args: &TO_BASE_ARGS,
            returns: "Number",
            examples: &TO_BASE_EXAMPLES,
            category: "conversion",
            related: &TO_BASE_RELATED,
        }
    }

    fn call(&self, args: &[Value], ctx: &SessionContext) -> Value {
        if let Err(e) = expect_args("to_base", args, 2) {
            return Value::Error(e);
        }
        let value = match number_arg("to_base", args, 0, "value") {
            Ok(v) => v,
            Err(e) => return Value::Error(e),
        };
        let unit = match text_arg("to_base", args, 1, "unit") {
            Ok(s) => s,
            Err(e) => return Value::Error(e),
        };

        match ctx.engine().to_base(value, unit) {
            Ok(base) => Value::Number(base),
            Err(e) => Value::Error(e.into()),
        }
    }
}

// ============ compatible ============

pub struct Compatible;

static COMPATIBLE_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("unit1", "Text", "First unit"),
    ArgMeta::required("unit2", "Text", "Second unit"),
];

static COMPATIBLE_EXAMPLES: [&str; 3] = [
    "compatible(\"kilometers\", \"miles\") → true",
    "compatible(\"volts\", \"amperes\") → false",
    "compatible(\"newton_meters\", \"joules\") → true",
];

static COMPATIBLE_RELATED: [&str; 2] = ["convert", "unit_info"];

impl FunctionPlugin for Compatible {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "compatible",
            description: "Check if two units can be converted into each other",
            usage: "compatible(unit1, unit2)",
            args: &COMPATIBLE_ARGS,
            returns: "Bool",
            examples: &COMPATIBLE_EXAMPLES,
            category: "conversion",
            related: &COMPATIBLE_RELATED,
        }
    }

    fn call(&self, args: &[Value], ctx: &SessionContext) -> Value {
        if let Err(e) = expect_args("compatible", args, 2) {
            return Value::Error(e);
        }
        let a = match text_arg("compatible", args, 0, "unit1") {
            Ok(s) => s,
            Err(e) => return Value::Error(e),
        };
        let b = match text_arg("compatible", args, 1, "unit2") {
            Ok(s) => s,
            Err(e) => return Value::Error(e),
        };

        Value::Bool(ctx.engine().compatible(a, b))
    }
}

// ============ formula ============

pub struct Formula;

static FORMULA_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("from_unit", "Text", "Source temperature scale"),
    ArgMeta::required("to_unit", "Text", "Target temperature scale"),
];

static FORMULA_EXAMPLES: [&str; 2] = [
    "formula(\"celsius\", \"fahrenheit\") → \"°F = (°C × 9/5) + 32\"",
    "formula(\"meters\", \"feet\") → null",
];

static FORMULA_RELATED: [&str; 1] = ["convert"];

impl FunctionPlugin for Formula {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "formula",
            description: "Human-readable formula for a temperature conversion, or null when none is documented",
            usage: "formula(from_unit, to_unit)",
            args: &FORMULA_ARGS,
            returns: "Text",
            examples: &FORMULA_EXAMPLES,
            category: "conversion",
            related: &FORMULA_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &SessionContext) -> Value {
        if let Err(e) = expect_args("formula", args, 2) {
            return Value::Error(e);
        }
        let from = match text_arg("formula", args, 0, "from_unit") {
            Ok(s) => s,
            Err(e) => return Value::Error(e),
        };
        let to = match text_arg("formula", args, 1, "to_unit") {
            Ok(s) => s,
            Err(e) => return Value::Error(e),
        };

        formula(from, to).map_or(Value::Null, Value::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use convertor_session::Session;
    use convertor_units::{Converter, CurrencyRates};

    fn ctx() -> SessionContext {
        SessionContext::with_defaults(Arc::new(PluginRegistry::new()))
    }

    fn text(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    #[test]
    fn test_convert_length() {
        let result = Convert.call(&[Value::Number(1.0), text("km"), text("m")], &ctx());
        assert_eq!(result, Value::Number(1000.0));
    }

    #[test]
    fn test_convert_temperature() {
        let result = Convert.call(&[Value::Number(100.0), text("celsius"), text("kelvin")], &ctx());
        let value = result.as_number().unwrap();
        assert!((value - 373.15).abs() < 1e-9);
    }

    #[test]
    fn test_convert_accepts_numeric_text() {
        let result = Convert.call(&[text("2"), text("hours"), text("minutes")], &ctx());
        assert_eq!(result, Value::Number(120.0));
    }

    #[test]
    fn test_convert_incompatible() {
        let result = Convert.call(&[Value::Number(1.0), text("meters"), text("kilograms")], &ctx());
        let err = result.as_error().unwrap();
        assert_eq!(err.code, codes::INCOMPATIBLE_UNITS);
        assert_eq!(err.message, "Invalid unit combination: meters to kilograms");
    }

    #[test]
    fn test_convert_arg_errors() {
        let result = Convert.call(&[Value::Number(1.0), text("meters")], &ctx());
        assert_eq!(result.as_error().unwrap().code, codes::ARG_COUNT);

        let result = Convert.call(&[Value::Number(1.0), Value::Number(2.0), text("meters")], &ctx());
        assert_eq!(result.as_error().unwrap().code, codes::ARG_TYPE);

        let result = Convert.call(&[text("NaN"), text("meters"), text("feet")], &ctx());
        assert_eq!(result.as_error().unwrap().code, codes::INVALID_INPUT);
    }

    #[test]
    fn test_convert_currency_uses_session_rates() {
        let rates = CurrencyRates::from_json(r#"{ "base": "USD", "rates": { "EUR": 0.5 } }"#).unwrap();
        let session = Session::new(Arc::new(Converter::with_rates(rates)));
        let ctx = SessionContext::new(Arc::new(PluginRegistry::new()), session);

        let result = Convert.call(&[Value::Number(10.0), text("USD"), text("EUR")], &ctx);
        assert_eq!(result, Value::Number(5.0));

        let result = Convert.call(&[Value::Number(10.0), text("USD"), text("GBP")], &ctx);
        assert_eq!(result.as_error().unwrap().code, codes::RATE_UNAVAILABLE);
    }

    #[test]
    fn test_to_base() {
        let result = ToBase.call(&[Value::Number(5.0), text("kilometers")], &ctx());
        assert_eq!(result, Value::Number(5000.0));

        let result = ToBase.call(&[Value::Number(5.0), text("leagues")], &ctx());
        assert_eq!(result.as_error().unwrap().code, codes::UNKNOWN_UNIT);
    }

    #[test]
    fn test_compatible() {
        assert_eq!(Compatible.call(&[text("km"), text("miles")], &ctx()), Value::Bool(true));
        assert_eq!(Compatible.call(&[text("volts"), text("amperes")], &ctx()), Value::Bool(false));
    }

    #[test]
    fn test_formula() {
        assert_eq!(
            Formula.call(&[text("fahrenheit"), text("celsius")], &ctx()),
            text("°C = (°F - 32) × 5/9")
        );
        assert_eq!(Formula.call(&[text("meters"), text("feet")], &ctx()), Value::Null);
    }
}
