//! Lenient payload deserializers
//!
//! Schema validation runs in collect-all-errors mode, so a
//! wrong-typed field must reach the validator as an absent value and
//! be reported in the field list, not abort deserialization of the
//! whole payload. These helpers accept any JSON value and yield
//! `None` for anything that does not fit the target type.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept a JSON string; anything else (number, bool, null, ...)
/// becomes `None` and is flagged by the schema check.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Accept a JSON number, coercing numeric strings (`"5000"`) the way
/// the wire contract always has; anything else becomes `None`.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Deserialize)]
    struct Payload {
        #[serde(default, deserialize_with = "lenient_string")]
        name: Option<String>,
        #[serde(default, deserialize_with = "lenient_f64")]
        salary: Option<f64>,
    }

    #[test]
    fn test_well_typed_fields_pass_through() {
        let p: Payload = serde_json::from_str(r#"{"name":"Alice","salary":5000}"#).unwrap();
        assert_eq!(p.name.as_deref(), Some("Alice"));
        assert_eq!(p.salary, Some(5000.0));
    }

    #[test]
    fn test_wrong_typed_string_becomes_none() {
        let p: Payload = serde_json::from_str(r#"{"name":123,"salary":5000}"#).unwrap();
        assert_eq!(p.name, None);
    }

    #[test]
    fn test_numeric_string_is_coerced() {
        let p: Payload = serde_json::from_str(r#"{"salary":"5000"}"#).unwrap();
        assert_eq!(p.salary, Some(5000.0));
    }

    #[test]
    fn test_non_numeric_salary_becomes_none() {
        let p: Payload = serde_json::from_str(r#"{"salary":"muito"}"#).unwrap();
        assert_eq!(p.salary, None);

        let p: Payload = serde_json::from_str(r#"{"salary":true}"#).unwrap();
        assert_eq!(p.salary, None);
    }

    #[test]
    fn test_null_and_missing_become_none() {
        let p: Payload = serde_json::from_str(r#"{"name":null}"#).unwrap();
        assert_eq!(p.name, None);
        assert_eq!(p.salary, None);
    }
}
