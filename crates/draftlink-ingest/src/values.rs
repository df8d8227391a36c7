//! Cell value conversions shared by the CSV and JSON loaders.

use serde_json::Value;

/// Parses an integer cell, accepting float spellings of whole numbers
/// (`"2020.0"`) as written by tools that widen integer columns with gaps.
///
/// Returns `Ok(None)` for empty cells and `Err` with a message for text that
/// is present but not a whole number.
pub fn parse_int(value: &str) -> Result<Option<i32>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if let Ok(parsed) = trimmed.parse::<i32>() {
        return Ok(Some(parsed));
    }
    match trimmed.parse::<f64>() {
        Ok(parsed)
            if parsed.fract() == 0.0
                && parsed >= f64::from(i32::MIN)
                && parsed <= f64::from(i32::MAX) =>
        {
            Ok(Some(parsed as i32))
        }
        _ => Err(format!("'{trimmed}' is not a whole number")),
    }
}

/// Text form of a JSON scalar; `null` and missing values are `None`.
pub fn value_to_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_plain_and_float_integers() {
        assert_eq!(parse_int("2020"), Ok(Some(2020)));
        assert_eq!(parse_int(" 2020.0 "), Ok(Some(2020)));
        assert_eq!(parse_int(""), Ok(None));
    }

    #[test]
    fn rejects_non_integers() {
        assert!(parse_int("2020.5").is_err());
        assert!(parse_int("1C").is_err());
        assert!(parse_int("NaN").is_err());
    }

    #[test]
    fn json_scalars_to_text() {
        assert_eq!(value_to_text(Some(&json!("Ohio State"))), Some("Ohio State".to_string()));
        assert_eq!(value_to_text(Some(&json!(2020))), Some("2020".to_string()));
        assert_eq!(value_to_text(Some(&json!(null))), None);
        assert_eq!(value_to_text(None), None);
    }
}
