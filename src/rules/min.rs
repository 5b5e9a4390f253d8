//! Numeric lower bound rule.
//!
//! License: MIT OR APACHE 2.0

use log::warn;
use serde_json::Value;

use super::{as_number, number_value, numeric_param, Rule};

/// Validates that a numeric value is at least `min` (param 0); sanitizes by
/// raising the value to `min`.
#[derive(Debug)]
pub struct Min;

impl Rule for Min {
    fn message_key(&self) -> &'static str {
        "FILTER_MIN"
    }

    fn validate(&self, value: &Value, params: &[Value]) -> bool {
        let Some(min) = numeric_param(params, 0) else {
            warn!("min rule invoked without a numeric bound parameter");
            return false;
        };
        match as_number(value) {
            Some(n) => n >= min,
            None => false,
        }
    }

    fn sanitize(&self, value: &Value, params: &[Value]) -> (bool, Value) {
        let Some(min) = numeric_param(params, 0) else {
            warn!("min rule invoked without a numeric bound parameter");
            return (false, value.clone());
        };
        match as_number(value) {
            Some(n) if n < min => (true, number_value(min)),
            Some(_) => (true, value.clone()),
            None => (false, value.clone()),
        }
    }
}
