//! record.rs - The record boundary: value bindings and the blank notion.
//!
//! The engine never touches a record's structure directly. Each spec
//! execution gets a [`Binding`], a short-lived read/write handle to one
//! field's slot, and rules operate through that handle alone. This keeps the
//! same invocation code working for JSON objects, raw maps, and typed
//! structs round-tripped through their keyed form.
//!
//! License: MIT OR APACHE 2.0

use serde_json::{Map, Value};

/// Returns true if a value counts as blank: JSON null, the empty string, or
/// a whitespace-only string. A field missing from the record entirely is
/// treated as blank by the blank-bypass invocation modes.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// A mutable handle to one field's slot in a record, scoped to a single spec
/// execution. Reads observe any write made by an earlier spec on the same
/// field; writes land in the caller's record immediately.
///
/// A binding over a field that is missing from the record reads as `None`
/// and silently drops writes: a fixing rule cannot conjure a field into
/// existence, it can only rewrite one that is there.
pub struct Binding<'a> {
    slot: Option<&'a mut Value>,
}

impl<'a> Binding<'a> {
    /// Binds to `field` in a keyed record, or to nothing if the field is
    /// absent.
    pub fn field(record: &'a mut Map<String, Value>, field: &str) -> Self {
        Self {
            slot: record.get_mut(field),
        }
    }

    /// Binds to a bare value outside any record, for one-shot rule
    /// application.
    pub fn value(value: &'a mut Value) -> Self {
        Self { slot: Some(value) }
    }

    /// The current value, or `None` when the bound field is missing.
    pub fn get(&self) -> Option<&Value> {
        self.slot.as_deref()
    }

    /// Writes `value` through to the underlying slot, if there is one.
    pub fn set(&mut self, value: Value) {
        if let Some(slot) = self.slot.as_deref_mut() {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_covers_null_and_whitespace() {
        assert!(is_blank(&Value::Null));
        assert!(is_blank(&json!("")));
        assert!(is_blank(&json!("  \t")));
        assert!(!is_blank(&json!("x")));
        assert!(!is_blank(&json!(0)));
        assert!(!is_blank(&json!([])));
    }

    #[test]
    fn binding_writes_through_to_record() {
        let mut record = Map::new();
        record.insert("field".to_string(), json!("old"));

        let mut binding = Binding::field(&mut record, "field");
        assert_eq!(binding.get(), Some(&json!("old")));
        binding.set(json!("new"));

        assert_eq!(record["field"], json!("new"));
    }

    #[test]
    fn missing_field_reads_none_and_drops_writes() {
        let mut record = Map::new();
        let mut binding = Binding::field(&mut record, "absent");
        assert_eq!(binding.get(), None);
        binding.set(json!("ignored"));
        assert!(record.is_empty());
    }
}
