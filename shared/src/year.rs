use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Calendar year used for every temporal comparison.
pub type Year = i32;

/// Parse a year typed into a form field or read from a slider.
///
/// Surrounding whitespace is ignored and integral decimals (`"1927.0"`) are
/// accepted. Anything else yields `None`.
pub fn parse_year(raw: &str) -> Option<Year> {
    let trimmed = raw.trim();
    if let Ok(year) = trimmed.parse::<Year>() {
        return Some(year);
    }
    trimmed.parse::<f64>().ok().and_then(integral_year)
}

/// Normalize a raw GeoJSON attribute into a year.
///
/// Numbers and numeric strings compare equal after normalization, so `1927`
/// and `"1927"` are the same year. `null`, booleans, non-integral numbers and
/// unparseable strings have no year.
pub fn year_from_value(value: &Value) -> Option<Year> {
    match value {
        Value::Number(number) => {
            if let Some(whole) = number.as_i64() {
                return Year::try_from(whole).ok();
            }
            number.as_f64().and_then(integral_year)
        }
        Value::String(raw) => parse_year(raw),
        _ => None,
    }
}

fn integral_year(value: f64) -> Option<Year> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value < Year::MIN as f64 || value > Year::MAX as f64 {
        return None;
    }
    Some(value as Year)
}

/// Serde adapter for lenient year attributes; malformed values become `None`
/// instead of failing the whole document.
pub fn deserialize_year<'de, D>(deserializer: D) -> Result<Option<Year>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(year_from_value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_year_accepts_plain_and_padded_integers() {
        assert_eq!(parse_year("1932"), Some(1932));
        assert_eq!(parse_year("  1932 "), Some(1932));
        assert_eq!(parse_year("-12"), Some(-12));
    }

    #[test]
    fn parse_year_accepts_integral_decimals_only() {
        assert_eq!(parse_year("1932.0"), Some(1932));
        assert_eq!(parse_year("1932.5"), None);
    }

    #[test]
    fn parse_year_rejects_garbage() {
        assert_eq!(parse_year(""), None);
        assert_eq!(parse_year("nineteen"), None);
        assert_eq!(parse_year("NaN"), None);
        assert_eq!(parse_year("inf"), None);
        assert_eq!(parse_year("1e12"), None);
    }

    #[test]
    fn numeric_and_string_attributes_normalize_to_same_year() {
        assert_eq!(year_from_value(&json!(1927)), Some(1927));
        assert_eq!(year_from_value(&json!(1927.0)), Some(1927));
        assert_eq!(year_from_value(&json!("1927")), Some(1927));
    }

    #[test]
    fn non_year_attributes_have_no_year() {
        assert_eq!(year_from_value(&Value::Null), None);
        assert_eq!(year_from_value(&json!(true)), None);
        assert_eq!(year_from_value(&json!(1927.25)), None);
        assert_eq!(year_from_value(&json!("unknown")), None);
        assert_eq!(year_from_value(&json!([1927])), None);
        assert_eq!(year_from_value(&json!(u64::MAX)), None);
    }

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "deserialize_year")]
        year: Option<Year>,
    }

    #[test]
    fn deserialize_year_is_lenient() {
        let parse = |raw: &str| serde_json::from_str::<Probe>(raw).map(|p| p.year).ok();
        assert_eq!(parse(r#"{"year": 1930}"#), Some(Some(1930)));
        assert_eq!(parse(r#"{"year": "1930"}"#), Some(Some(1930)));
        assert_eq!(parse(r#"{"year": null}"#), Some(None));
        assert_eq!(parse(r#"{"year": {"nested": 1}}"#), Some(None));
        assert_eq!(parse(r#"{}"#), Some(None));
    }
}
