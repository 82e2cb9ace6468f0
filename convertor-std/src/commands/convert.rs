//! convert_and_record and chart

use convertor_plugin::prelude::*;
use convertor_session::ConversionRequest;
use tracing::warn;
use crate::functions::args::{expect_args, number_arg, text_arg};
use crate::values::{chart_value, conversion_value};

pub struct ConvertAndRecord;

static CONVERT_AND_RECORD_ARGS: [ArgMeta; 3] = [
    ArgMeta::required("value", "Number", "Value to convert"),
    ArgMeta::required("from_unit", "Text", "Source unit"),
    ArgMeta::required("to_unit", "Text", "Target unit"),
];

static CONVERT_AND_RECORD_EXAMPLES: [&str; 2] = [
    "convert_and_record(100, \"celsius\", \"fahrenheit\") → {headline: \"100 Celsius = 212 Fahrenheit\", ...}",
    "convert_and_record(1, \"meters\", \"kilograms\") → #ERROR INCOMPATIBLE_UNITS",
];

impl CommandPlugin for ConvertAndRecord {
    fn meta(&self) -> CommandMeta {
        CommandMeta {
            name: "convert_and_record",
            description: "Convert a value and add it to the session history; failures are not recorded",
            args: &CONVERT_AND_RECORD_ARGS,
            examples: &CONVERT_AND_RECORD_EXAMPLES,
        }
    }

    fn execute(&self, args: &[Value], ctx: &mut SessionContext) -> Value {
        if let Err(e) = expect_args("convert_and_record", args, 3) {
            return Value::Error(e);
        }
        let value = match number_arg("convert_and_record", args, 0, "value") {
            Ok(v) => v,
            Err(e) => return Value::Error(e),
        };
        let from = match text_arg("convert_and_record", args, 1, "from_unit") {
            Ok(s) => s,
            Err(e) => return Value::Error(e),
        };
        let to = match text_arg("convert_and_record", args, 2, "to_unit") {
            Ok(s) => s,
            Err(e) => return Value::Error(e),
        };

        match ctx.session.convert(&ConversionRequest::new(value, from, to)) {
            Ok(conversion) => {
                let mut result = conversion_value(&conversion);
                if let Value::Object(map) = &mut result {
                    map.insert("favorite".to_string(), Value::Bool(ctx.session.is_favorite(from, to)));
                }
                result
            }
            Err(e) => {
                warn!(value, from, to, error = %e, "conversion rejected");
                Value::Error(e.into())
            }
        }
    }
}

pub struct Chart;

static CHART_EXAMPLES: [&str; 1] = [
    "chart() → {title: \"Conversion Visualization\", bars: [Original, Converted], ...}",
];

impl CommandPlugin for Chart {
    fn meta(&self) -> CommandMeta {
        CommandMeta {
            name: "chart",
            description: "Bar chart of the last recorded conversion in the session theme, or null before any conversion",
            args: &[],
            examples: &CHART_EXAMPLES,
        }
    }

    fn execute(&self, args: &[Value], ctx: &mut SessionContext) -> Value {
        if let Err(e) = expect_args("chart", args, 0) {
            return Value::Error(e);
        }
        ctx.session.chart().map_or(Value::Null, |chart| chart_value(&chart))
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
    fn test_convert_and_record() {
        let mut ctx = ctx();
        ctx.session.toggle_favorite("kilometers", "meters");

        let result = ConvertAndRecord.execute(&[Value::Number(2.0), text("kilometers"), text("meters")], &mut ctx);
        assert_eq!(result.get("result"), Value::Number(2000.0));
        assert_eq!(result.get("headline"), text("2 Kilometers = 2000 Meters"));
        assert_eq!(result.get("formula"), Value::Null);
        assert_eq!(result.get("favorite"), Value::Bool(true));
        assert_eq!(ctx.session.history().len(), 1);
    }

    #[test]
    fn test_rejected_conversion_not_recorded() {
        let mut ctx = ctx();
        let result = ConvertAndRecord.execute(&[Value::Number(1.0), text("volts"), text("amperes")], &mut ctx);

        assert_eq!(result.as_error().unwrap().code, codes::INCOMPATIBLE_UNITS);
        assert!(ctx.session.history().is_empty());
    }

    #[test]
    fn test_chart() {
        let mut ctx = ctx();
        assert_eq!(Chart.execute(&[], &mut ctx), Value::Null);

        ConvertAndRecord.execute(&[Value::Number(1.0), text("hours"), text("minutes")], &mut ctx);
        let chart = Chart.execute(&[], &mut ctx);
        assert_eq!(chart.get("title"), text("Conversion Visualization"));
        assert_eq!(chart.get("font_color"), text("white"));

        let bars = chart.get("bars");
        let bars = bars.as_list().unwrap();
        assert_eq!(bars[0].get("label"), text("Hours"));
        assert_eq!(bars[1].get("value"), Value::Number(60.0));
        assert_eq!(bars[1].get("color"), text("#81C784"));
    }
}
