//! chain.rs - Rule spec bookkeeping and per-field message aggregation.
//!
//! This module defines the data structures the engine iterates over: the
//! [`RuleSpec`] entries registered by the caller, the [`InvocationMode`] and
//! [`ChainType`] enums that select how a rule is invoked and what its failure
//! does to the rest of the field's chain, and the [`FieldMessages`] container
//! that collects failure messages in execution order.
//!
//! License: MIT OR APACHE 2.0

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Selects which capability of a resolved rule a spec invokes.
///
/// The fixing modes write the transformed value back into the record before
/// the next spec on the same field runs, so later specs and the caller both
/// observe the mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvocationMode {
    /// The rule's predicate must hold.
    Is,
    /// The rule's predicate must not hold.
    IsNot,
    /// A blank or missing value passes immediately; otherwise the predicate
    /// must hold.
    IsBlankOr,
    /// The rule's transform is applied and written back in place.
    Fix,
    /// A blank or missing value is left untouched; otherwise the transform is
    /// applied and written back.
    FixBlankOr,
}

/// Governs whether a failing spec halts the rest of its field's chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChainType {
    /// Record the message and keep going with the field's remaining specs.
    Soft,
    /// Record the message and halt the field; other fields are unaffected.
    Hard,
    /// Record the message and halt the field. `Stop` is kept distinct from
    /// `Hard` for callers that want to express "give up on this field"
    /// versus "this check is a prerequisite"; the engine treats both as a
    /// per-field halt and never aborts the remaining fields.
    Stop,
}

/// One registered rule application: which field, how to invoke, which rule,
/// with which extra parameters, and what a failure does to the chain.
///
/// Specs are immutable once added and the engine executes them in exactly
/// the order they were registered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSpec {
    /// The record field this spec applies to.
    pub field: String,
    /// The invocation mode (predicate, negated predicate, transform, ...).
    pub mode: InvocationMode,
    /// The rule name, resolved through the locator at run time.
    pub name: String,
    /// Extra positional parameters handed to the rule and to the message
    /// template on failure.
    pub params: Vec<Value>,
    /// Failure policy for the owning field's chain.
    pub chain: ChainType,
}

/// Ordered mapping from field name to the ordered list of failure messages
/// recorded for it during one run.
///
/// Fields appear in the order of their first failure; each field's messages
/// appear in the order its failing specs executed. A field with no failures
/// is absent entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldMessages {
    entries: Vec<(String, Vec<String>)>,
}

impl FieldMessages {
    /// Creates an empty message set.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if no field recorded any failure.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of fields with at least one recorded failure.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The messages recorded for `field`, empty if the field never failed.
    pub fn get(&self, field: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, messages)| messages.as_slice())
            .unwrap_or(&[])
    }

    /// True if `field` recorded at least one failure.
    pub fn contains(&self, field: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == field)
    }

    /// Iterates `(field, messages)` pairs in first-failure order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, messages)| (name.as_str(), messages.as_slice()))
    }

    /// Appends a message to `field`'s list, creating the list on first use.
    pub(crate) fn push(&mut self, field: &str, message: String) {
        match self.entries.iter_mut().find(|(name, _)| name == field) {
            Some((_, messages)) => messages.push(message),
            None => self.entries.push((field.to_string(), vec![message])),
        }
    }
}
