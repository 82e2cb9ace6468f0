//! Bounded, newest-first conversion history

use std::fmt::Display;
use chrono::{DateTime, Local, TimeZone};
use serde::{Serialize, Deserialize};
use convertor_core::{format_input, format_sig, HISTORY_DIGITS};
use convertor_units::format_unit;

/// Entries kept per session
pub const HISTORY_LIMIT: usize = 10;

/// Timestamp layout for history entries (local time)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One successful conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: String,
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
    pub result: f64,
}

impl HistoryEntry {
    pub fn new(timestamp: impl Into<String>, value: f64, from_unit: &str, to_unit: &str, result: f64) -> Self {
        HistoryEntry {
            timestamp: timestamp.into(),
            value,
            from_unit: from_unit.to_string(),
            to_unit: to_unit.to_string(),
            result,
        }
    }

    /// Entry stamped with the given instant
    pub fn stamped<Tz>(at: &DateTime<Tz>, value: f64, from_unit: &str, to_unit: &str, result: f64) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self::new(at.format(TIMESTAMP_FORMAT).to_string(), value, from_unit, to_unit, result)
    }

    /// Entry stamped with the current local time
    pub fn now(value: f64, from_unit: &str, to_unit: &str, result: f64) -> Self {
        Self::stamped(&Local::now(), value, from_unit, to_unit, result)
    }

    /// "5 Kilometers → 3.1 Miles"; the result is cut to two significant digits
    pub fn summary(&self) -> String {
        format!(
            "{} {} → {} {}",
            format_input(self.value),
            format_unit(&self.from_unit),
            format_sig(self.result, HISTORY_DIGITS),
            format_unit(&self.to_unit)
        )
    }
}

/// Most recent conversions, front = newest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert at the front, dropping the oldest entry past the limit
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_LIMIT);
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn entry(n: usize) -> HistoryEntry {
        HistoryEntry::new("2024-01-01 00:00:00", n as f64, "meters", "feet", n as f64 * 3.28084)
    }

    #[test]
    fn test_record_puts_newest_first() {
        let mut history = History::new();
        history.record(entry(1));
        history.record(entry(2));

        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].value, 2.0);
        assert_eq!(history.entries()[1].value, 1.0);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut history = History::new();
        for n in 1..=15 {
            history.record(entry(n));
        }

        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history.entries()[0].value, 15.0);
        assert_eq!(history.entries()[9].value, 6.0);
    }

    #[test]
    fn test_summary_of_huge_value() {
        let entry = HistoryEntry::new("2024-01-01 00:00:00", 1e300, "petabytes", "terabytes", 1e303);
        assert_eq!(entry.summary(), "1e+300 Petabytes → 1e+303 Terabytes");
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        history.record(entry(1));
        history.clear();
        assert!(history.is_empty());
        assert!(history.entries().is_empty());
    }

    #[test]
    fn test_stamped_format() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_opt(14, 5, 7))
            .unwrap()
            .and_utc();
        let e = HistoryEntry::stamped(&at, 1.0, "meters", "feet", 3.28084);
        assert_eq!(e.timestamp, "2024-03-09 14:05:07");

        let now = HistoryEntry::stamped(&Utc::now(), 1.0, "meters", "feet", 3.28084);
        assert_eq!(now.timestamp.len(), 19);
    }

    #[test]
    fn test_summary_uses_two_significant_digits() {
        let e = HistoryEntry::new("2024-01-01 00:00:00", 5.0, "kilometers", "miles", 3.10686);
        assert_eq!(e.summary(), "5 Kilometers → 3.1 Miles");
    }

    #[test]
    fn test_serializes_as_list() {
        let mut history = History::new();
        history.record(entry(1));
        let json = serde_json::to_value(&history).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["from_unit"], "meters");
    }
}
