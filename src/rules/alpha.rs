//! Alphabetic string rule.
//!
//! License: MIT OR APACHE 2.0

use serde_json::Value;

use super::Rule;

/// Validates that a value is a non-empty alphabetic string; sanitizes by
/// stripping every non-alphabetic character.
#[derive(Debug)]
pub struct Alpha;

impl Rule for Alpha {
    fn message_key(&self) -> &'static str {
        "FILTER_ALPHA"
    }

    fn validate(&self, value: &Value, _params: &[Value]) -> bool {
        match value.as_str() {
            Some(s) => !s.is_empty() && s.chars().all(char::is_alphabetic),
            None => false,
        }
    }

    fn sanitize(&self, value: &Value, _params: &[Value]) -> (bool, Value) {
        match value.as_str() {
            Some(s) => {
                let kept: String = s.chars().filter(|c| c.is_alphabetic()).collect();
                (true, Value::String(kept))
            }
            None => (false, value.clone()),
        }
    }
}
