//! Inclusive numeric range rule.
//!
//! License: MIT OR APACHE 2.0

use log::warn;
use serde_json::Value;

use super::{as_number, number_value, numeric_param, Rule};

/// Validates that a numeric value lies in `[min, max]` (params 0 and 1);
/// sanitizes by clamping into that range.
#[derive(Debug)]
pub struct Between;

impl Between {
    fn bounds(params: &[Value]) -> Option<(f64, f64)> {
        let min = numeric_param(params, 0)?;
        let max = numeric_param(params, 1)?;
        if min > max {
            return None;
        }
        Some((min, max))
    }
}

impl Rule for Between {
    fn message_key(&self) -> &'static str {
        "FILTER_BETWEEN"
    }

    fn validate(&self, value: &Value, params: &[Value]) -> bool {
        let Some((min, max)) = Self::bounds(params) else {
            warn!("between rule invoked without a valid numeric min/max range");
            return false;
        };
        match as_number(value) {
            Some(n) => n >= min && n <= max,
            None => false,
        }
    }

    fn sanitize(&self, value: &Value, params: &[Value]) -> (bool, Value) {
        let Some((min, max)) = Self::bounds(params) else {
            warn!("between rule invoked without a valid numeric min/max range");
            return (false, value.clone());
        };
        match as_number(value) {
            Some(n) => (true, number_value(n.clamp(min, max))),
            None => (false, value.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validates_inclusive_bounds() {
        let params = [json!(1), json!(9)];
        assert!(Between.validate(&json!(1), &params));
        assert!(Between.validate(&json!(9), &params));
        assert!(!Between.validate(&json!(10), &params));
        assert!(!Between.validate(&json!("abc"), &params));
    }

    #[test]
    fn sanitize_clamps() {
        let params = [json!(1), json!(9)];
        assert_eq!(Between.sanitize(&json!(42), &params), (true, json!(9)));
        assert_eq!(Between.sanitize(&json!(-3), &params), (true, json!(1)));
        assert_eq!(Between.sanitize(&json!(5), &params), (true, json!(5)));
    }

    #[test]
    fn missing_params_fail_rather_than_panic() {
        assert!(!Between.validate(&json!(5), &[]));
        let (ok, _) = Between.sanitize(&json!(5), &[json!(1)]);
        assert!(!ok);
    }
}
