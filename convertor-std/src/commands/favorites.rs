//! toggle_favorite and favorites

use convertor_plugin::prelude::*;
use convertor_session::FavoritePair;
use crate::functions::args::{expect_args, text_arg};
use crate::values::favorite_value;

pub struct ToggleFavorite;

static TOGGLE_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("from_unit", "Text", "Source unit of the pair"),
    ArgMeta::required("to_unit", "Text", "Target unit of the pair"),
];

static TOGGLE_EXAMPLES: [&str; 1] = [
    "toggle_favorite(\"celsius\", \"fahrenheit\") → {key: \"celsius->fahrenheit\", favorite: true}",
];

impl CommandPlugin for ToggleFavorite {
    fn meta(&self) -> CommandMeta {
        CommandMeta {
            name: "toggle_favorite",
            description: "Add a unit pair to favorites, or remove it if already there",
            args: &TOGGLE_ARGS,
            examples: &TOGGLE_EXAMPLES,
        }
    }

    fn execute(&self, args: &[Value], ctx: &mut SessionContext) -> Value {
        if let Err(e) = expect_args("toggle_favorite", args, 2) {
            return Value::Error(e);
        }
        let from = match text_arg("toggle_favorite", args, 0, "from_unit") {
            Ok(s) => s,
            Err(e) => return Value::Error(e),
        };
        let to = match text_arg("toggle_favorite", args, 1, "to_unit") {
            Ok(s) => s,
            Err(e) => return Value::Error(e),
        };

        let favorite = ctx.session.toggle_favorite(from, to);
        let mut result = favorite_value(&FavoritePair::resolved(from, to));
        if let Value::Object(map) = &mut result {
            map.insert("favorite".to_string(), Value::Bool(favorite));
        }
        result
    }
}

pub struct Favorites;

static FAVORITES_EXAMPLES: [&str; 1] = [
    "favorites() → [{from: \"celsius\", to: \"fahrenheit\", label: \"Celsius → Fahrenheit\"}]",
];

impl CommandPlugin for Favorites {
    fn meta(&self) -> CommandMeta {
        CommandMeta {
            name: "favorites",
            description: "List favorite unit pairs, sorted by key",
            args: &[],
            examples: &FAVORITES_EXAMPLES,
        }
    }

    fn execute(&self, args: &[Value], ctx: &mut SessionContext) -> Value {
        if let Err(e) = expect_args("favorites", args, 0) {
            return Value::Error(e);
        }
        Value::List(ctx.session.favorites().iter().map(favorite_value).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn text(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    #[test]
    fn test_toggle_twice() {
        let mut ctx = SessionContext::with_defaults(Arc::new(PluginRegistry::new()));

        let result = ToggleFavorite.execute(&[text("celsius"), text("fahrenheit")], &mut ctx);
        assert_eq!(result.get("favorite"), Value::Bool(true));
        assert_eq!(result.get("key"), text("celsius->fahrenheit"));

        let listed = Favorites.execute(&[], &mut ctx);
        assert_eq!(listed.as_list().unwrap()[0].get("label"), text("Celsius → Fahrenheit"));

        let result = ToggleFavorite.execute(&[text("celsius"), text("fahrenheit")], &mut ctx);
        assert_eq!(result.get("favorite"), Value::Bool(false));
        assert_eq!(Favorites.execute(&[], &mut ctx), Value::List(vec![]));
    }

    #[test]
    fn test_toggle_reports_catalog_ids() {
        let mut ctx = SessionContext::with_defaults(Arc::new(PluginRegistry::new()));

        let result = ToggleFavorite.execute(&[text("meters"), text("feet")], &mut ctx);
        assert_eq!(result.get("favorite"), Value::Bool(true));

        let result = ToggleFavorite.execute(&[text("m"), text("ft")], &mut ctx);
        assert_eq!(result.get("key"), text("meters->feet"));
        assert_eq!(result.get("favorite"), Value::Bool(false));
        assert_eq!(Favorites.execute(&[], &mut ctx), Value::List(vec![]));
    }

    #[test]
    fn test_toggle_needs_two_units() {
        let mut ctx = SessionContext::with_defaults(Arc::new(PluginRegistry::new()));
        let result = ToggleFavorite.execute(&[text("celsius")], &mut ctx);
        assert_eq!(result.as_error().unwrap().code, codes::ARG_COUNT);
    }
}
