//! Built-in rules and the shared rule invocation layer.
//!
//! A leaf rule implements only two primitives: a predicate (`validate`) and
//! a transform (`sanitize`). Negation, blank-bypass, and the read/write
//! binding to the record are implemented once here in [`invoke`], uniformly
//! for every rule, so a leaf never needs to know which invocation mode it
//! is running under.
//!
//! License: MIT OR APACHE 2.0

use serde_json::Value;

use crate::chain::InvocationMode;
use crate::record::{is_blank, Binding};

pub mod alnum;
pub mod alpha;
pub mod between;
pub mod blank;
pub mod int;
pub mod max;
pub mod min;
pub mod regex;
pub mod strict_equal_to_value;
pub mod string;
pub mod strlen;
pub mod strlen_min;

pub use alnum::Alnum;
pub use alpha::Alpha;
pub use between::Between;
pub use blank::Blank;
pub use int::Int;
pub use max::Max;
pub use min::Min;
pub use regex::RegexRule;
pub use strict_equal_to_value::StrictEqualToValue;
pub use string::StringRule;
pub use strlen::Strlen;
pub use strlen_min::StrlenMin;

/// A named predicate + transform pair operating on one value.
///
/// Instances are constructed fresh per invocation by the locator and never
/// outlive one spec execution, so implementations are free to be stateless
/// unit structs.
pub trait Rule: std::fmt::Debug {
    /// The default message-catalog key reported when this rule fails and no
    /// field-level override is set.
    fn message_key(&self) -> &'static str;

    /// True iff `value` satisfies the rule's predicate given `params`.
    fn validate(&self, value: &Value, params: &[Value]) -> bool;

    /// Applies the rule's transform, returning whether it succeeded and the
    /// (possibly unchanged) resulting value. A `false` verdict leaves the
    /// record untouched.
    fn sanitize(&self, value: &Value, params: &[Value]) -> (bool, Value);
}

/// Invokes `rule` on the bound value according to `mode`.
///
/// A missing value (the binding reads `None`) passes the blank-bypass modes
/// and fails every direct mode; no rule primitive is called for it.
pub fn invoke(
    rule: &dyn Rule,
    mode: InvocationMode,
    binding: &mut Binding<'_>,
    params: &[Value],
) -> bool {
    match mode {
        InvocationMode::Is => match binding.get() {
            Some(value) => rule.validate(value, params),
            None => false,
        },
        InvocationMode::IsNot => match binding.get() {
            Some(value) => !rule.validate(value, params),
            None => false,
        },
        InvocationMode::IsBlankOr => match binding.get() {
            Some(value) if !is_blank(value) => rule.validate(value, params),
            _ => true,
        },
        InvocationMode::Fix => match binding.get() {
            Some(value) => {
                let (ok, fixed) = rule.sanitize(value, params);
                if ok {
                    binding.set(fixed);
                }
                ok
            }
            None => false,
        },
        InvocationMode::FixBlankOr => match binding.get() {
            Some(value) if !is_blank(value) => {
                let (ok, fixed) = rule.sanitize(value, params);
                if ok {
                    binding.set(fixed);
                }
                ok
            }
            _ => true,
        },
    }
}

/// Numeric view of a value: JSON numbers directly, plus strings that parse
/// as numbers. Everything else is non-numeric.
pub(crate) fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// The spec parameter at `index`, viewed numerically.
pub(crate) fn numeric_param(params: &[Value], index: usize) -> Option<f64> {
    params.get(index).and_then(as_number)
}

/// Converts a numeric result back to a JSON number, preferring the integer
/// representation when the value is whole.
pub(crate) fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        Value::from(n as i64)
    } else {
        Value::from(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn is_not_negates_the_predicate() {
        let mut value = json!("123abc");
        let mut binding = Binding::value(&mut value);
        assert!(!invoke(&Alpha, InvocationMode::Is, &mut binding, &[]));
        assert!(invoke(&Alpha, InvocationMode::IsNot, &mut binding, &[]));
    }

    #[test]
    fn blank_bypass_skips_predicate_and_transform() {
        let mut value = json!("   ");
        let mut binding = Binding::value(&mut value);
        assert!(invoke(&Int, InvocationMode::IsBlankOr, &mut binding, &[]));
        assert!(invoke(&Int, InvocationMode::FixBlankOr, &mut binding, &[]));
        assert_eq!(value, json!("   "));
    }

    #[test]
    fn failed_fix_leaves_value_untouched() {
        let mut value = json!(["not", "an", "int"]);
        let mut binding = Binding::value(&mut value);
        assert!(!invoke(&Int, InvocationMode::Fix, &mut binding, &[]));
        assert_eq!(value, json!(["not", "an", "int"]));
    }
}
