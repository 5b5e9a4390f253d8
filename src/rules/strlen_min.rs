//! Minimum string length rule.
//!
//! License: MIT OR APACHE 2.0

use log::warn;
use serde_json::Value;

use super::{numeric_param, Rule};

/// Validates that a string is at least `min` characters (param 0); sanitizes
/// by right-padding with spaces up to `min`.
#[derive(Debug)]
pub struct StrlenMin;

impl Rule for StrlenMin {
    fn message_key(&self) -> &'static str {
        "FILTER_STRLEN_MIN"
    }

    fn validate(&self, value: &Value, params: &[Value]) -> bool {
        let Some(min) = numeric_param(params, 0) else {
            warn!("strlen_min rule invoked without a numeric length parameter");
            return false;
        };
        match value.as_str() {
            Some(s) => s.chars().count() >= min as usize,
            None => false,
        }
    }

    fn sanitize(&self, value: &Value, params: &[Value]) -> (bool, Value) {
        let Some(min) = numeric_param(params, 0) else {
            warn!("strlen_min rule invoked without a numeric length parameter");
            return (false, value.clone());
        };
        let min = min as usize;
        match value.as_str() {
            Some(s) => {
                let count = s.chars().count();
                let mut fixed = s.to_string();
                if count < min {
                    fixed.extend(std::iter::repeat(' ').take(min - count));
                }
                (true, Value::String(fixed))
            }
            None => (false, value.clone()),
        }
    }
}
