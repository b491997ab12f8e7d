use serde_json::{Number, Value};

/// Largest integer every f64 below it represents exactly
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Convert a text field to a number the way the quote feed has always been read.
///
/// Surrounding whitespace is ignored and an empty field is `0.0`. A missing
/// field or anything that is not a plain decimal literal (`N/D`, `-`, `1,5`)
/// becomes NaN instead of an error.
pub fn text_to_number(field: Option<&str>) -> f64 {
    let Some(text) = field else {
        return f64::NAN;
    };
    let text = text.trim();

    if text.is_empty() {
        return 0.0;
    }

    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    // Rust also accepts "inf" and "nan"; keep to digits, sign, point and exponent
    if !text.chars().all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')) {
        return f64::NAN;
    }

    text.parse::<f64>().unwrap_or(f64::NAN)
}

/// Rewrite whole floats as integers, so `233.0` is written as `233`.
///
/// Floats with a fractional part, or too large to be exact, are left alone.
pub fn whole_floats_to_integers(value: &mut Value) {
    match value {
        Value::Number(n) if n.is_f64() => {
            if let Some(f) = n.as_f64() {
                if f.fract() == 0.0 && f.abs() < MAX_EXACT_INTEGER {
                    *n = Number::from(f as i64);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(whole_floats_to_integers),
        Value::Object(map) => map.values_mut().for_each(whole_floats_to_integers),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_decimals() {
        assert_eq!(text_to_number(Some("240.01")), 240.01);
        assert_eq!(text_to_number(Some("233")), 233.0);
        assert_eq!(text_to_number(Some(" -1.5e3 ")), -1500.0);
        assert_eq!(text_to_number(Some(".5")), 0.5);
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(text_to_number(Some("")), 0.0);
        assert_eq!(text_to_number(Some("  ")), 0.0);
    }

    #[test]
    fn test_malformed_is_nan() {
        assert!(text_to_number(None).is_nan());
        assert!(text_to_number(Some("N/D")).is_nan());
        assert!(text_to_number(Some("1,5")).is_nan());
        assert!(text_to_number(Some("inf")).is_nan());
        assert!(text_to_number(Some("-")).is_nan());
    }

    #[test]
    fn test_whole_floats_become_integers() {
        let mut value = json!({
            "low": 233.0,
            "volume": 207602546.0,
            "close": 236.85,
            "neg": -4.0,
            "huge": 1e300,
            "gap": null,
            "nested": [{"uah": 138000.0}]
        });

        whole_floats_to_integers(&mut value);

        assert_eq!(
            serde_json::to_string(&value).unwrap(),
            r#"{"low":233,"volume":207602546,"close":236.85,"neg":-4,"huge":1e300,"gap":null,"nested":[{"uah":138000}]}"#
        );
    }
}
