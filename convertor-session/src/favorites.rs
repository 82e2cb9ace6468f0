//! Favorite conversion pairs

use std::collections::BTreeSet;
use std::fmt;
use serde::{Serialize, Deserialize};
use convertor_units::UNITS;

/// Separator between the two units of a favorite key
pub const PAIR_SEPARATOR: &str = "->";

/// A saved (from, to) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoritePair {
    pub from: String,
    pub to: String,
}

impl FavoritePair {
    pub fn new(from: &str, to: &str) -> Self {
        FavoritePair { from: from.to_string(), to: to.to_string() }
    }

    /// Pair keyed by catalog ids, so `m` and `meters` name the same favorite
    pub fn resolved(from: &str, to: &str) -> Self {
        FavoritePair { from: canonical_id(from), to: canonical_id(to) }
    }

    /// Canonical "from->to" key
    pub fn key(&self) -> String {
        format!("{}{}{}", self.from, PAIR_SEPARATOR, self.to)
    }

    pub fn parse(key: &str) -> Option<Self> {
        let (from, to) = key.split_once(PAIR_SEPARATOR)?;
        Some(Self::new(from, to))
    }
}

impl fmt::Display for FavoritePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Set of favorite keys, iterated in key order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    keys: BTreeSet<String>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the pair if present, add it otherwise. Returns whether the
    /// pair is a favorite afterwards.
    pub fn toggle(&mut self, from: &str, to: &str) -> bool {
        let key = FavoritePair::new(from, to).key();
        if self.keys.remove(&key) {
            false
        } else {
            self.keys.insert(key);
            true
        }
    }

    pub fn contains(&self, from: &str, to: &str) -> bool {
        self.keys.contains(&FavoritePair::new(from, to).key())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(|k| k.as_str())
    }

    pub fn pairs(&self) -> Vec<FavoritePair> {
        self.keys.iter().filter_map(|k| FavoritePair::parse(k)).collect()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Catalog id for a registered unit or alias; anything else is kept as given
pub(crate) fn canonical_id(unit: &str) -> String {
    UNITS.get(unit).map_or_else(|| unit.to_string(), |u| u.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut favorites = Favorites::new();

        assert!(favorites.toggle("celsius", "fahrenheit"));
        assert!(favorites.contains("celsius", "fahrenheit"));
        assert!(!favorites.contains("fahrenheit", "celsius"));

        assert!(!favorites.toggle("celsius", "fahrenheit"));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_double_toggle_is_noop() {
        let mut favorites = Favorites::new();
        favorites.toggle("meters", "feet");
        let before = favorites.clone();

        favorites.toggle("miles", "kilometers");
        favorites.toggle("miles", "kilometers");
        assert_eq!(favorites, before);
    }

    #[test]
    fn test_pairs_sorted_by_key() {
        let mut favorites = Favorites::new();
        favorites.toggle("miles", "kilometers");
        favorites.toggle("USD", "EUR");
        favorites.toggle("celsius", "kelvin");

        let keys: Vec<&str> = favorites.keys().collect();
        assert_eq!(keys, vec!["USD->EUR", "celsius->kelvin", "miles->kilometers"]);
        assert_eq!(favorites.pairs()[1], FavoritePair::new("celsius", "kelvin"));
    }

    #[test]
    fn test_parse_key() {
        assert_eq!(FavoritePair::parse("bytes->bits"), Some(FavoritePair::new("bytes", "bits")));
        assert_eq!(FavoritePair::parse("nonsense"), None);
        assert_eq!(FavoritePair::new("a", "b").to_string(), "a->b");
    }
}
