//! Integer rule.
//!
//! License: MIT OR APACHE 2.0

use serde_json::Value;

use super::Rule;

/// Validates that a value is an integer, or a string spelling one;
/// sanitizes by coercing to an integer (`"123"` becomes `123`, fractional
/// numbers are truncated toward zero).
#[derive(Debug)]
pub struct Int;

/// Integer reading of a value, if it has one.
fn to_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f.trunc() as i64))
        }
        _ => None,
    }
}

impl Rule for Int {
    fn message_key(&self) -> &'static str {
        "FILTER_INT"
    }

    fn validate(&self, value: &Value, _params: &[Value]) -> bool {
        match value {
            Value::Number(n) => n.is_i64() || n.is_u64(),
            Value::String(s) => s.trim().parse::<i64>().is_ok(),
            _ => false,
        }
    }

    fn sanitize(&self, value: &Value, _params: &[Value]) -> (bool, Value) {
        match to_int(value) {
            Some(n) => (true, Value::from(n)),
            None => (false, value.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validates_integers_and_integer_strings() {
        assert!(Int.validate(&json!(42), &[]));
        assert!(Int.validate(&json!("123"), &[]));
        assert!(Int.validate(&json!(" -7 "), &[]));
        assert!(!Int.validate(&json!(1.5), &[]));
        assert!(!Int.validate(&json!("1.5"), &[]));
        assert!(!Int.validate(&json!([]), &[]));
    }

    #[test]
    fn sanitize_coerces_strings_and_truncates() {
        assert_eq!(Int.sanitize(&json!("123"), &[]), (true, json!(123)));
        assert_eq!(Int.sanitize(&json!(12.9), &[]), (true, json!(12)));
        let (ok, kept) = Int.sanitize(&json!("twelve"), &[]);
        assert!(!ok);
        assert_eq!(kept, json!("twelve"));
    }
}
