//! Strict equality rule.
//!
//! License: MIT OR APACHE 2.0

use log::warn;
use serde_json::Value;

use super::Rule;

/// Validates that a value strictly equals param 0, type included: the
/// string `"1"` does not equal the number `1`, `true`, or `1.0`. Sanitizes
/// by unconditionally replacing the value with param 0, whatever the input
/// was.
#[derive(Debug)]
pub struct StrictEqualToValue;

impl Rule for StrictEqualToValue {
    fn message_key(&self) -> &'static str {
        "FILTER_STRICT_EQUAL_TO_VALUE"
    }

    fn validate(&self, value: &Value, params: &[Value]) -> bool {
        let Some(other) = params.first() else {
            warn!("strict_equal_to_value rule invoked without a comparison parameter");
            return false;
        };
        value == other
    }

    fn sanitize(&self, value: &Value, params: &[Value]) -> (bool, Value) {
        let Some(other) = params.first() else {
            warn!("strict_equal_to_value rule invoked without a comparison parameter");
            return (false, value.clone());
        };
        (true, other.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn equality_is_type_sensitive() {
        let params = [json!("1")];
        assert!(StrictEqualToValue.validate(&json!("1"), &params));
        assert!(!StrictEqualToValue.validate(&json!(1), &params));
        assert!(!StrictEqualToValue.validate(&json!(true), &params));
        assert!(!StrictEqualToValue.validate(&json!(1.00), &params));
    }

    #[test]
    fn sanitize_replaces_any_input_with_the_parameter() {
        let params = [json!("1")];
        for input in [json!(0), json!(1), json!("1"), json!(true), json!(false)] {
            assert_eq!(
                StrictEqualToValue.sanitize(&input, &params),
                (true, json!("1"))
            );
        }
    }

    #[test]
    fn missing_parameter_fails_rather_than_panics() {
        assert!(!StrictEqualToValue.validate(&json!("1"), &[]));
        let (ok, kept) = StrictEqualToValue.sanitize(&json!("1"), &[]);
        assert!(!ok);
        assert_eq!(kept, json!("1"));
    }
}
