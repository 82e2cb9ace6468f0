//! Convertor Core - Fundamental types
//!
//! This crate provides the core types used throughout Convertor:
//! - `Value`: Runtime values passed to and returned from plugins
//! - `ConvertorError`: Structured errors reported at the boundary
//! - `format_sig`, `format_input`: display of results and input values

mod value;
mod error;
mod format;

pub use value::Value;
pub use error::{ConvertorError, codes};
pub use format::{format_input, format_sig, HEADLINE_DIGITS, HISTORY_DIGITS};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Value, ConvertorError};
    pub use crate::error::codes;
}

#[cfg(test)]
mod tests {
    use super::*;

    mod value_tests {
        use super::*;
        use std::collections::HashMap;

        #[test]
        fn test_accessors() {
            assert_eq!(Value::Number(2.5).as_number(), Some(2.5));
            assert_eq!(Value::Text("m".into()).as_text(), Some("m"));
            assert_eq!(Value::Bool(true).as_bool(), Some(true));
            assert!(Value::Null.is_null());
            assert!(Value::Number(1.0).as_text().is_none());
        }

        #[test]
        fn test_get_field() {
            let mut obj = HashMap::new();
            obj.insert("result".to_string(), Value::Number(32.0));
            let v = Value::Object(obj);

            assert_eq!(v.get("result").as_number(), Some(32.0));
            assert!(v.get("missing").is_error());
            assert!(Value::Number(1.0).get("x").is_error());
        }

        #[test]
        fn test_to_number_from_text() {
            assert_eq!(Value::Text(" 42.5 ".into()).to_number().as_number(), Some(42.5));
            assert!(Value::Text("abc".into()).to_number().is_error());
        }

        #[test]
        fn test_display() {
            assert_eq!(Value::Number(373.15).to_string(), "373.15");
            assert_eq!(Value::Text("kelvin".into()).to_string(), "kelvin");
            assert_eq!(Value::List(vec![Value::from(1.0), Value::from("a")]).to_string(), "[1, a]");
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn test_error_display() {
            let err = ConvertorError::unknown_unit("parsecs");
            let s = err.to_string();
            assert!(s.starts_with("[UNKNOWN_UNIT]"));
            assert!(s.contains("parsecs"));
            assert!(s.contains("suggestion"));
        }

        #[test]
        fn test_error_serializes_without_empty_fields() {
            let err = ConvertorError::new(codes::OUT_OF_RANGE, "too large");
            let json = serde_json::to_value(&err).unwrap();
            assert_eq!(json["code"], "OUT_OF_RANGE");
            assert!(json.get("suggestion").is_none());
        }
    }
}
