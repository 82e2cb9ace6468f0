//! Display of conversion values
//!
//! Results mirror printf `%g`: fixed notation unless the decimal exponent is
//! below -4 or at least the requested digit count, trailing zeros trimmed.
//! Inputs keep every digit and switch to exponent form outside 1e-4..1e16.

/// Digits shown for the headline result of a conversion
pub const HEADLINE_DIGITS: usize = 6;

/// Digits shown for a result in the history list
pub const HISTORY_DIGITS: usize = 2;

/// Format `value` with `digits` significant digits, `%g` style.
pub fn format_sig(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf".to_string() } else { "-inf".to_string() };
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let digits = digits.max(1);

    // Exponent after rounding to `digits` places (9.9999 -> 1.0e1)
    let sci = format!("{:.*e}", digits - 1, value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m.to_string(), e.parse::<i32>().unwrap_or(0)),
        None => (sci.clone(), 0),
    };

    if exp < -4 || exp >= digits as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(&mantissa), sign, exp.abs())
    } else {
        let decimals = (digits as i32 - 1 - exp).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value))
    }
}

/// Format a user-supplied value with the shortest digits that round-trip.
pub fn format_input(value: f64) -> String {
    if !value.is_finite() {
        return format_sig(value, HEADLINE_DIGITS);
    }
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let sci = format!("{:e}", value);
        match sci.split_once('e') {
            Some((mantissa, exp)) => {
                let exp = exp.parse::<i32>().unwrap_or(0);
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exp.abs())
            }
            None => sci,
        }
    } else {
        value.to_string()
    }
}

fn trim_fraction(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_notation() {
        assert_eq!(format_sig(373.15, 6), "373.15");
        assert_eq!(format_sig(32.0, 6), "32");
        assert_eq!(format_sig(-40.0, 6), "-40");
        assert_eq!(format_sig(1.609344, 6), "1.60934");
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(format_sig(1234567.0, 6), "1.23457e+06");
        assert_eq!(format_sig(0.00001, 6), "1e-05");
        assert_eq!(format_sig(6.241509074e18, 6), "6.24151e+18");
    }

    #[test]
    fn test_history_precision() {
        assert_eq!(format_sig(0.0001234, 2), "0.00012");
        assert_eq!(format_sig(3.28084, 2), "3.3");
        assert_eq!(format_sig(1000.0, 2), "1e+03");
        assert_eq!(format_sig(99.9, 2), "1e+02");
    }

    #[test]
    fn test_input_display() {
        assert_eq!(format_input(100.0), "100");
        assert_eq!(format_input(2.5), "2.5");
        assert_eq!(format_input(1234567.0), "1234567");
        assert_eq!(format_input(1e300), "1e+300");
        assert_eq!(format_input(-1.5e-5), "-1.5e-05");
        assert_eq!(format_input(0.0), "0");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(format_sig(0.0, 6), "0");
        assert_eq!(format_sig(f64::NAN, 6), "nan");
        assert_eq!(format_sig(f64::NEG_INFINITY, 6), "-inf");
    }
}
