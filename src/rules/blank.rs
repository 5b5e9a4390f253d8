//! Blank value rule.
//!
//! License: MIT OR APACHE 2.0

use serde_json::Value;

use super::Rule;
use crate::record::is_blank;

/// Validates that a value is blank (null, empty, or whitespace-only);
/// sanitizes by replacing the value with null.
#[derive(Debug)]
pub struct Blank;

impl Rule for Blank {
    fn message_key(&self) -> &'static str {
        "FILTER_BLANK"
    }

    fn validate(&self, value: &Value, _params: &[Value]) -> bool {
        is_blank(value)
    }

    fn sanitize(&self, _value: &Value, _params: &[Value]) -> (bool, Value) {
        (true, Value::Null)
    }
}
