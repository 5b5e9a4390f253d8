//! String cast rule.
//!
//! License: MIT OR APACHE 2.0

use serde_json::Value;

use super::Rule;

/// Validates that a value is a string. Sanitizing casts a scalar to its
/// string form (null becomes the empty string); when params carry a
/// `[find, replace]` pair the cast result additionally has every `find`
/// occurrence replaced.
///
/// Arrays and objects have no sensible string form and fail the transform.
#[derive(Debug)]
pub struct StringRule;

fn to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

impl Rule for StringRule {
    fn message_key(&self) -> &'static str {
        "FILTER_STRING"
    }

    fn validate(&self, value: &Value, _params: &[Value]) -> bool {
        value.is_string()
    }

    fn sanitize(&self, value: &Value, params: &[Value]) -> (bool, Value) {
        let Some(mut s) = to_string(value) else {
            return (false, value.clone());
        };
        if let (Some(find), Some(replace)) = (
            params.first().and_then(Value::as_str),
            params.get(1).and_then(Value::as_str),
        ) {
            s = s.replace(find, replace);
        }
        (true, Value::String(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sanitize_casts_scalars() {
        assert_eq!(StringRule.sanitize(&json!(88), &[]), (true, json!("88")));
        assert_eq!(StringRule.sanitize(&Value::Null, &[]), (true, json!("")));
        let (ok, _) = StringRule.sanitize(&json!({}), &[]);
        assert!(!ok);
    }

    #[test]
    fn sanitize_applies_find_replace_params() {
        let params = [json!("foo"), json!("bar")];
        assert_eq!(
            StringRule.sanitize(&json!("foo"), &params),
            (true, json!("bar"))
        );
    }
}
