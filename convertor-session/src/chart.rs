//! Bar-chart description of a single conversion
//!
//! Rendering is left to the client; this is the data it needs.

use serde::Serialize;
use convertor_units::format_unit;
use crate::Theme;

pub const CHART_TITLE: &str = "Conversion Visualization";
pub const CHART_HEIGHT: u32 = 300;
pub const ORIGINAL_COLOR: &str = "#2E7D32";
pub const CONVERTED_COLOR: &str = "#81C784";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBar {
    /// Legend entry
    pub name: &'static str,
    /// Axis label, the display name of the unit
    pub label: String,
    pub value: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionChart {
    pub title: &'static str,
    pub bars: Vec<ChartBar>,
    pub height: u32,
    pub barmode: &'static str,
    pub show_legend: bool,
    pub font_color: &'static str,
}

impl ConversionChart {
    pub fn new(value: f64, from_unit: &str, to_unit: &str, result: f64, theme: Theme) -> Self {
        ConversionChart {
            title: CHART_TITLE,
            bars: vec![
                ChartBar {
                    name: "Original",
                    label: format_unit(from_unit),
                    value,
                    color: ORIGINAL_COLOR,
                },
                ChartBar {
                    name: "Converted",
                    label: format_unit(to_unit),
                    value: result,
                    color: CONVERTED_COLOR,
                },
            ],
            height: CHART_HEIGHT,
            barmode: "group",
            show_legend: true,
            font_color: theme.font_color(),
        }
    }
}
