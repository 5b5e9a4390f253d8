//! Regular expression rule.
//!
//! License: MIT OR APACHE 2.0

use log::warn;
use regex::Regex;
use serde_json::Value;

use super::Rule;

/// Validates that a string value matches the pattern in param 0; sanitizes
/// by replacing every match of param 0 with the replacement in param 1.
///
/// An unparseable pattern is reported as a rule failure, not a panic: the
/// pattern arrives as data through the spec params, so it gets the same
/// degraded handling as any other bad parameter.
#[derive(Debug)]
pub struct RegexRule;

fn compile(params: &[Value]) -> Option<Regex> {
    let pattern = params.first().and_then(Value::as_str)?;
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            warn!("regex rule failed to compile pattern '{pattern}': {e}");
            None
        }
    }
}

impl Rule for RegexRule {
    fn message_key(&self) -> &'static str {
        "FILTER_REGEX"
    }

    fn validate(&self, value: &Value, params: &[Value]) -> bool {
        let Some(re) = compile(params) else {
            return false;
        };
        match value.as_str() {
            Some(s) => re.is_match(s),
            None => false,
        }
    }

    fn sanitize(&self, value: &Value, params: &[Value]) -> (bool, Value) {
        let Some(re) = compile(params) else {
            return (false, value.clone());
        };
        let Some(replacement) = params.get(1).and_then(Value::as_str) else {
            warn!("regex rule invoked in a fixing mode without a replacement parameter");
            return (false, value.clone());
        };
        match value.as_str() {
            Some(s) => (true, Value::String(re.replace_all(s, replacement).into_owned())),
            None => (false, value.clone()),
        }
    }
}
