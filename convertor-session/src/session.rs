//! Per-user session state

use std::sync::Arc;
use serde::{Serialize, Deserialize};
use tracing::{debug, info};
use convertor_core::{format_input, format_sig, HEADLINE_DIGITS};
use convertor_units::{format_unit, formula, ConversionError, Converter};
use crate::favorites::canonical_id;
use crate::{ConversionChart, Favorites, FavoritePair, History, HistoryEntry, Theme};

/// A value and the two units to convert between
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
}

impl ConversionRequest {
    pub fn new(value: f64, from_unit: &str, to_unit: &str) -> Self {
        ConversionRequest {
            value,
            from_unit: from_unit.to_string(),
            to_unit: to_unit.to_string(),
        }
    }
}

/// A successful conversion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
    pub result: f64,
}

impl Conversion {
    /// "100 Celsius = 212 Fahrenheit", result at six significant digits
    pub fn headline(&self) -> String {
        format!(
            "{} {} = {} {}",
            format_input(self.value),
            format_unit(&self.from_unit),
            format_sig(self.result, HEADLINE_DIGITS),
            format_unit(&self.to_unit)
        )
    }

    pub fn formula(&self) -> Option<&'static str> {
        formula(&self.from_unit, &self.to_unit)
    }

    pub fn chart(&self, theme: Theme) -> ConversionChart {
        ConversionChart::new(self.value, &self.from_unit, &self.to_unit, self.result, theme)
    }
}

/// History, favorites and theme for one user, plus the engine they convert with
#[derive(Debug, Clone)]
pub struct Session {
    engine: Arc<Converter>,
    history: History,
    favorites: Favorites,
    theme: Theme,
    last: Option<Conversion>,
}

impl Session {
    pub fn new(engine: Arc<Converter>) -> Self {
        Session {
            engine,
            history: History::new(),
            favorites: Favorites::new(),
            theme: Theme::default(),
            last: None,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn engine(&self) -> &Converter {
        &self.engine
    }

    /// Run the engine; on success the conversion is recorded with the
    /// current local time. Failures leave the session untouched.
    pub fn convert(&mut self, request: &ConversionRequest) -> Result<Conversion, ConversionError> {
        let result = self.engine.convert(request.value, &request.from_unit, &request.to_unit)?;
        let from = canonical_id(&request.from_unit);
        let to = canonical_id(&request.to_unit);
        self.record_conversion(HistoryEntry::now(request.value, &from, &to, result));
        let conversion = Conversion {
            value: request.value,
            from_unit: from,
            to_unit: to,
            result,
        };
        self.last = Some(conversion.clone());
        Ok(conversion)
    }

    pub fn record_conversion(&mut self, entry: HistoryEntry) {
        debug!(from = %entry.from_unit, to = %entry.to_unit, "recording conversion");
        self.history.record(entry);
    }

    /// Returns whether the pair is a favorite afterwards. Aliases are keyed
    /// by their catalog id.
    pub fn toggle_favorite(&mut self, from: &str, to: &str) -> bool {
        let pair = FavoritePair::resolved(from, to);
        let added = self.favorites.toggle(&pair.from, &pair.to);
        info!(from = %pair.from, to = %pair.to, added, "favorite toggled");
        added
    }

    pub fn is_favorite(&self, from: &str, to: &str) -> bool {
        let pair = FavoritePair::resolved(from, to);
        self.favorites.contains(&pair.from, &pair.to)
    }

    pub fn favorites(&self) -> Vec<FavoritePair> {
        self.favorites.pairs()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        self.history.entries()
    }

    pub fn clear_history(&mut self) {
        info!(dropped = self.history.len(), "history cleared");
        self.history.clear();
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        if theme != self.theme {
            info!(%theme, "theme changed");
        }
        self.theme = theme;
    }

    /// The most recent successful conversion made through `convert`
    pub fn last_conversion(&self) -> Option<&Conversion> {
        self.last.as_ref()
    }

    /// Chart of the most recent conversion in the current theme
    pub fn chart(&self) -> Option<ConversionChart> {
        self.last_conversion().map(|c| c.chart(self.theme))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Arc::new(Converter::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_convert_records_history() {
        let mut session = Session::default();
        let conversion = session.convert(&ConversionRequest::new(100.0, "celsius", "fahrenheit")).unwrap();

        assert_abs_diff_eq!(conversion.result, 212.0, epsilon = 1e-9);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].from_unit, "celsius");
        assert_eq!(session.history()[0].timestamp.len(), 19);
    }

    #[test]
    fn test_failed_conversion_not_recorded() {
        let mut session = Session::default();
        let err = session.convert(&ConversionRequest::new(1.0, "meters", "kilograms"));

        assert_eq!(err, Err(ConversionError::incompatible("meters", "kilograms")));
        assert!(session.history().is_empty());
        assert!(session.last_conversion().is_none());
    }

    #[test]
    fn test_fifteen_conversions_keep_ten() {
        let mut session = Session::default();
        for n in 1..=15 {
            session.convert(&ConversionRequest::new(n as f64, "meters", "centimeters")).unwrap();
        }

        assert_eq!(session.history().len(), 10);
        assert_eq!(session.history()[0].value, 15.0);
    }

    #[test]
    fn test_favorites() {
        let mut session = Session::default();
        assert!(session.toggle_favorite("miles", "kilometers"));
        assert!(session.is_favorite("miles", "kilometers"));
        assert_eq!(session.favorites(), vec![FavoritePair::new("miles", "kilometers")]);

        assert!(!session.toggle_favorite("miles", "kilometers"));
        assert!(session.favorites().is_empty());
    }

    #[test]
    fn test_aliases_recorded_as_catalog_ids() {
        let mut session = Session::default();
        let conversion = session.convert(&ConversionRequest::new(1.0, "km", "m")).unwrap();

        assert_eq!(conversion.headline(), "1 Kilometers = 1000 Meters");
        assert_eq!(session.history()[0].from_unit, "kilometers");
        assert_eq!(session.history()[0].to_unit, "meters");
        assert_eq!(session.last_conversion().map(|c| c.to_unit.as_str()), Some("meters"));
    }

    #[test]
    fn test_alias_toggle_cancels_full_name_toggle() {
        let mut session = Session::default();
        assert!(session.toggle_favorite("meters", "feet"));
        assert!(session.is_favorite("m", "ft"));
        assert!(!session.toggle_favorite("m", "ft"));
        assert!(session.favorites().is_empty());

        session.toggle_favorite("degC", "Fahrenheit");
        assert_eq!(session.favorites(), vec![FavoritePair::new("celsius", "fahrenheit")]);
    }

    #[test]
    fn test_headline_of_huge_value() {
        let mut session = Session::default();
        let conversion = session.convert(&ConversionRequest::new(1e300, "petabytes", "terabytes")).unwrap();
        assert_eq!(conversion.headline(), "1e+300 Petabytes = 1e+303 Terabytes");
    }

    #[test]
    fn test_headline_and_formula() {
        let conversion = Conversion {
            value: 1.0,
            from_unit: "nautical_miles".into(),
            to_unit: "meters".into(),
            result: 1852.0,
        };
        assert_eq!(conversion.headline(), "1 Nautical Miles = 1852 Meters");
        assert_eq!(conversion.formula(), None);

        let conversion = Conversion {
            value: 100.0,
            from_unit: "celsius".into(),
            to_unit: "kelvin".into(),
            result: 373.15,
        };
        assert_eq!(conversion.headline(), "100 Celsius = 373.15 Kelvin");
        assert_eq!(conversion.formula(), Some("K = °C + 273.15"));
    }

    #[test]
    fn test_theme_and_chart() {
        let mut session = Session::default();
        assert_eq!(session.theme(), Theme::Dark);
        assert!(session.chart().is_none());

        session.convert(&ConversionRequest::new(2.0, "kilograms", "grams")).unwrap();
        session.set_theme(Theme::Light);

        let chart = session.chart().unwrap();
        assert_eq!(chart.font_color, "black");
        assert_eq!(chart.bars[1].label, "Grams");
    }

    #[test]
    fn test_clear_history() {
        let mut session = Session::default();
        session.convert(&ConversionRequest::new(1.0, "hours", "minutes")).unwrap();
        session.clear_history();
        assert!(session.history().is_empty());
    }
}
