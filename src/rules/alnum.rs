//! Alphanumeric string rule.
//!
//! License: MIT OR APACHE 2.0

use serde_json::Value;

use super::Rule;

/// Validates that a value is a non-empty alphanumeric string; sanitizes by
/// stripping every non-alphanumeric character.
#[derive(Debug)]
pub struct Alnum;

impl Rule for Alnum {
    fn message_key(&self) -> &'static str {
        "FILTER_ALNUM"
    }

    fn validate(&self, value: &Value, _params: &[Value]) -> bool {
        match value.as_str() {
            Some(s) => !s.is_empty() && s.chars().all(char::is_alphanumeric),
            None => false,
        }
    }

    fn sanitize(&self, value: &Value, _params: &[Value]) -> (bool, Value) {
        match value.as_str() {
            Some(s) => {
                let kept: String = s.chars().filter(|c| c.is_alphanumeric()).collect();
                (true, Value::String(kept))
            }
            None => (false, value.clone()),
        }
    }
}
