//! Argument extraction shared by functions and commands

use convertor_core::{ConvertorError, Value};

/// Fail unless exactly `expected` arguments were passed
pub fn expect_args(func: &str, args: &[Value], expected: usize) -> Result<(), ConvertorError> {
    if args.len() != expected {
        return Err(ConvertorError::arg_count(func, expected, args.len()));
    }
    Ok(())
}

/// Numeric argument; numeric text is accepted
pub fn number_arg(func: &str, args: &[Value], index: usize, name: &str) -> Result<f64, ConvertorError> {
    match args.get(index).map(Value::to_number) {
        Some(Value::Number(n)) => Ok(n),
        Some(Value::Error(e)) if matches!(args[index], Value::Text(_) | Value::Error(_)) => Err(e),
        Some(_) => Err(ConvertorError::arg_type(func, name, "Number", args[index].type_name())),
        None => Err(ConvertorError::arg_count(func, index + 1, args.len())),
    }
}

pub fn text_arg<'a>(func: &str, args: &'a [Value], index: usize, name: &str) -> Result<&'a str, ConvertorError> {
    match args.get(index) {
        Some(Value::Text(s)) => Ok(s.as_str()),
        Some(Value::Error(e)) => Err(e.clone()),
        Some(other) => Err(ConvertorError::arg_type(func, name, "Text", other.type_name())),
        None => Err(ConvertorError::arg_count(func, index + 1, args.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use convertor_core::codes;

    #[test]
    fn test_number_arg() {
        let args = [Value::Number(1.5), Value::from(" 2 "), Value::from("abc"), Value::Bool(true)];
        assert_eq!(number_arg("f", &args, 0, "x"), Ok(1.5));
        assert_eq!(number_arg("f", &args, 1, "x"), Ok(2.0));
        assert_eq!(number_arg("f", &args, 2, "x").unwrap_err().code, codes::INVALID_INPUT);
        assert_eq!(number_arg("f", &args, 3, "x").unwrap_err().code, codes::ARG_TYPE);
        assert_eq!(number_arg("f", &args, 4, "x").unwrap_err().code, codes::ARG_COUNT);
    }

    #[test]
    fn test_text_arg() {
        let args = [Value::from("meters"), Value::Number(1.0)];
        assert_eq!(text_arg("f", &args, 0, "unit"), Ok("meters"));
        assert_eq!(text_arg("f", &args, 1, "unit").unwrap_err().code, codes::ARG_TYPE);
    }

    #[test]
    fn test_expect_args() {
        assert!(expect_args("f", &[], 0).is_ok());
        assert_eq!(expect_args("f", &[Value::Null], 2).unwrap_err().code, codes::ARG_COUNT);
    }
}
