//! Numeric upper bound rule.
//!
//! License: MIT OR APACHE 2.0

use log::warn;
use serde_json::Value;

use super::{as_number, number_value, numeric_param, Rule};

/// Validates that a numeric value is at most `max` (param 0); sanitizes by
/// capping the value at `max`.
#[derive(Debug)]
pub struct Max;

impl Rule for Max {
    fn message_key(&self) -> &'static str {
        "FILTER_MAX"
    }

    fn validate(&self, value: &Value, params: &[Value]) -> bool {
        let Some(max) = numeric_param(params, 0) else {
            warn!("max rule invoked without a numeric bound parameter");
            return false;
        };
        match as_number(value) {
            Some(n) => n <= max,
            None => false,
        }
    }

    fn sanitize(&self, value: &Value, params: &[Value]) -> (bool, Value) {
        let Some(max) = numeric_param(params, 0) else {
            warn!("max rule invoked without a numeric bound parameter");
            return (false, value.clone());
        };
        match as_number(value) {
            Some(n) if n > max => (true, number_value(max)),
            Some(_) => (true, value.clone()),
            None => (false, value.clone()),
        }
    }
}
