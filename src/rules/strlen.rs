//! Exact string length rule.
//!
//! License: MIT OR APACHE 2.0

use log::warn;
use serde_json::Value;

use super::{numeric_param, Rule};

/// Validates that a string is exactly `len` characters (param 0); sanitizes
/// by right-padding with spaces or truncating to `len`.
///
/// Lengths count characters, not bytes.
#[derive(Debug)]
pub struct Strlen;

impl Rule for Strlen {
    fn message_key(&self) -> &'static str {
        "FILTER_STRLEN"
    }

    fn validate(&self, value: &Value, params: &[Value]) -> bool {
        let Some(len) = numeric_param(params, 0) else {
            warn!("strlen rule invoked without a numeric length parameter");
            return false;
        };
        match value.as_str() {
            Some(s) => s.chars().count() == len as usize,
            None => false,
        }
    }

    fn sanitize(&self, value: &Value, params: &[Value]) -> (bool, Value) {
        let Some(len) = numeric_param(params, 0) else {
            warn!("strlen rule invoked without a numeric length parameter");
            return (false, value.clone());
        };
        let len = len as usize;
        match value.as_str() {
            Some(s) => {
                let count = s.chars().count();
                let fixed = if count < len {
                    let mut padded = s.to_string();
                    padded.extend(std::iter::repeat(' ').take(len - count));
                    padded
                } else {
                    s.chars().take(len).collect()
                };
                (true, Value::String(fixed))
            }
            None => (false, value.clone()),
        }
    }
}
