//! Shaping engine and session data as plugin values

use std::collections::HashMap;
use convertor_core::Value;
use convertor_session::{Conversion, ConversionChart, FavoritePair, HistoryEntry};
use convertor_units::{format_unit, Unit, UnitCategory, UNITS};

fn object<const N: usize>(fields: [(&str, Value); N]) -> Value {
    Value::Object(fields.into_iter().map(|(k, v)| (k.to_string(), v)).collect::<HashMap<_, _>>())
}

pub fn category_value(category: &UnitCategory) -> Value {
    object([
        ("name", Value::from(category.name)),
        ("label", Value::from(category.label())),
        ("icon", Value::from(category.icon)),
        ("units", Value::from(category.units.to_vec())),
    ])
}

pub fn unit_value(unit: &Unit) -> Value {
    let base = UNITS.base_unit(unit.dimension)
        .map(|u| Value::from(u.id.as_str()))
        .unwrap_or(Value::Null);
    object([
        ("id", Value::from(unit.id.as_str())),
        ("display", Value::from(format_unit(&unit.id))),
        ("name", Value::from(unit.name.as_str())),
        ("symbol", Value::from(unit.symbol.as_str())),
        ("category", Value::from(unit.category.as_str())),
        ("dimension", Value::from(unit.dimension.name().map_or_else(|| unit.dimension.to_string(), str::to_string))),
        ("base_unit", base),
    ])
}

pub fn conversion_value(conversion: &Conversion) -> Value {
    object([
        ("value", Value::Number(conversion.value)),
        ("from_unit", Value::from(conversion.from_unit.as_str())),
        ("to_unit", Value::from(conversion.to_unit.as_str())),
        ("result", Value::Number(conversion.result)),
        ("headline", Value::from(conversion.headline())),
        ("formula", conversion.formula().map_or(Value::Null, Value::from)),
    ])
}

pub fn history_value(entry: &HistoryEntry) -> Value {
    object([
        ("timestamp", Value::from(entry.timestamp.as_str())),
        ("value", Value::Number(entry.value)),
        ("from_unit", Value::from(entry.from_unit.as_str())),
        ("to_unit", Value::from(entry.to_unit.as_str())),
        ("result", Value::Number(entry.result)),
        ("summary", Value::from(entry.summary())),
    ])
}

pub fn favorite_value(pair: &FavoritePair) -> Value {
    object([
        ("from", Value::from(pair.from.as_str())),
        ("to", Value::from(pair.to.as_str())),
        ("key", Value::from(pair.key())),
        ("label", Value::from(format!("{} → {}", format_unit(&pair.from), format_unit(&pair.to)))),
    ])
}

pub fn chart_value(chart: &ConversionChart) -> Value {
    let bars = chart.bars.iter().map(|bar| object([
        ("name", Value::from(bar.name)),
        ("label", Value::from(bar.label.as_str())),
        ("value", Value::Number(bar.value)),
        ("color", Value::from(bar.color)),
    ])).collect();
    object([
        ("title", Value::from(chart.title)),
        ("bars", Value::List(bars)),
        ("height", Value::Number(f64::from(chart.height))),
        ("barmode", Value::from(chart.barmode)),
        ("show_legend", Value::Bool(chart.show_legend)),
        ("font_color", Value::from(chart.font_color)),
    ])
}
