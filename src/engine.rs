//! engine.rs - The rule-chain orchestrator.
//!
//! `FilterEngine` owns an ordered list of rule specs, a rule locator, and a
//! message catalog. A run walks the specs in registration order, resolves
//! each spec's rule by name, binds it to the field's current value, invokes
//! the requested mode, and on failure records a message and applies the
//! chain policy. The engine is reusable: specs persist across runs, while
//! the message mapping is rebuilt from scratch on every run.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};

use crate::chain::{ChainType, FieldMessages, InvocationMode, RuleSpec};
use crate::errors::SieveError;
use crate::locator::RuleLocator;
use crate::record::Binding;
use crate::rules;
use crate::translate::MessageCatalog;

/// Executes ordered chains of named rules against the fields of a record,
/// aggregating human-readable failure messages per field.
///
/// Soft failures record a message and keep the field's chain going; hard
/// and stop failures record a message and halt the rest of that field's
/// chain. Other fields are never affected by one field's failures. Fixing
/// modes write the transformed value back into the record immediately, so
/// later specs on the same field and the caller both observe the mutation.
pub struct FilterEngine {
    locator: RuleLocator,
    catalog: Box<dyn MessageCatalog>,
    specs: Vec<RuleSpec>,
    overrides: HashMap<String, String>,
    messages: FieldMessages,
}

impl FilterEngine {
    /// Creates an engine around an injected locator and catalog.
    pub fn new(locator: RuleLocator, catalog: impl MessageCatalog + 'static) -> Self {
        Self {
            locator,
            catalog: Box::new(catalog),
            specs: Vec::new(),
            overrides: HashMap::new(),
            messages: FieldMessages::new(),
        }
    }

    /// Creates an engine with every built-in rule and the en-US catalog.
    pub fn with_defaults() -> Self {
        Self::new(
            RuleLocator::with_default_rules(),
            crate::translate::Translator::en_us(),
        )
    }

    /// Appends a rule spec. The name is not validated here; resolution is
    /// deferred to run time so the locator can be populated late.
    pub fn add_rule(
        &mut self,
        field: impl Into<String>,
        chain: ChainType,
        mode: InvocationMode,
        name: impl Into<String>,
        params: Vec<Value>,
    ) -> &mut Self {
        self.specs.push(RuleSpec {
            field: field.into(),
            mode,
            name: name.into(),
            params,
            chain,
        });
        self
    }

    /// Appends a soft rule: a failure records a message and the field's
    /// chain continues.
    pub fn add_soft_rule(
        &mut self,
        field: impl Into<String>,
        mode: InvocationMode,
        name: impl Into<String>,
        params: Vec<Value>,
    ) -> &mut Self {
        self.add_rule(field, ChainType::Soft, mode, name, params)
    }

    /// Appends a hard rule: a failure records a message and halts the
    /// field's remaining specs.
    pub fn add_hard_rule(
        &mut self,
        field: impl Into<String>,
        mode: InvocationMode,
        name: impl Into<String>,
        params: Vec<Value>,
    ) -> &mut Self {
        self.add_rule(field, ChainType::Hard, mode, name, params)
    }

    /// Appends a stop rule: a failure records a message and halts the
    /// field's remaining specs. Later fields still run.
    pub fn add_stop_rule(
        &mut self,
        field: impl Into<String>,
        mode: InvocationMode,
        name: impl Into<String>,
        params: Vec<Value>,
    ) -> &mut Self {
        self.add_rule(field, ChainType::Stop, mode, name, params)
    }

    /// Collapses all of `field`'s failure messages to the single rendering
    /// of `key`, replacing every rule-specific message for that field.
    pub fn use_field_message(&mut self, field: impl Into<String>, key: impl Into<String>) {
        self.overrides.insert(field.into(), key.into());
    }

    /// The registered specs, in registration order.
    pub fn rules(&self) -> &[RuleSpec] {
        &self.specs
    }

    /// The injected rule locator.
    pub fn locator(&self) -> &RuleLocator {
        &self.locator
    }

    /// Mutable access to the locator, for registering rules after
    /// construction.
    pub fn locator_mut(&mut self) -> &mut RuleLocator {
        &mut self.locator
    }

    /// The injected message catalog.
    pub fn catalog(&self) -> &dyn MessageCatalog {
        self.catalog.as_ref()
    }

    /// Runs the full chain against a JSON record, which must be an object.
    ///
    /// Returns `Ok(true)` iff no field recorded a failure. Fixing specs
    /// mutate `record` in place. A non-object record is a usage error, not
    /// a validation failure.
    pub fn run(&mut self, record: &mut Value) -> Result<bool, SieveError> {
        match record {
            Value::Object(map) => self.run_map(map),
            other => Err(SieveError::InvalidRecord(format!(
                "expected an object, got {}",
                value_kind(other)
            ))),
        }
    }

    /// Runs the full chain against a raw keyed map.
    pub fn run_map(&mut self, record: &mut Map<String, Value>) -> Result<bool, SieveError> {
        let mut messages = FieldMessages::new();
        let mut halted: HashSet<&str> = HashSet::new();

        for spec in &self.specs {
            if halted.contains(spec.field.as_str()) {
                continue;
            }

            let rule = self.locator.get(&spec.name)?;
            let mut binding = Binding::field(record, &spec.field);
            let ok = rules::invoke(rule.as_ref(), spec.mode, &mut binding, &spec.params);
            debug!(
                "Applied rule '{}' ({:?}) to field '{}': {}",
                spec.name,
                spec.mode,
                spec.field,
                if ok { "pass" } else { "fail" }
            );
            if ok {
                continue;
            }

            match self.overrides.get(&spec.field) {
                // An override pins the field to exactly one message; later
                // failures on the field add nothing.
                Some(key) => {
                    if !messages.contains(&spec.field) {
                        messages.push(&spec.field, self.catalog.render(key, &[]));
                    }
                }
                None => {
                    messages.push(
                        &spec.field,
                        self.catalog.render(rule.message_key(), &spec.params),
                    );
                }
            }

            match spec.chain {
                ChainType::Soft => {}
                ChainType::Hard | ChainType::Stop => {
                    debug!("Halting remaining specs for field '{}'", spec.field);
                    halted.insert(spec.field.as_str());
                }
            }
        }

        self.messages = messages;
        Ok(self.messages.is_empty())
    }

    /// Runs the full chain against any serializable record type.
    ///
    /// The record is round-tripped through its keyed form, so fixing specs
    /// mutate the caller's struct. The type must serialize to an object.
    pub fn run_record<T>(&mut self, record: &mut T) -> Result<bool, SieveError>
    where
        T: Serialize + DeserializeOwned,
    {
        let mut value = serde_json::to_value(&*record)
            .map_err(|e| SieveError::SerializationError(e.to_string()))?;
        let ok = self.run(&mut value)?;
        *record =
            serde_json::from_value(value).map_err(|e| SieveError::SerializationError(e.to_string()))?;
        Ok(ok)
    }

    /// Applies a single named rule to a single bare value, outside any
    /// record or chain. Fixing modes mutate `value` in place. No message is
    /// recorded; the caller gets the raw verdict.
    pub fn apply(
        &self,
        value: &mut Value,
        mode: InvocationMode,
        name: &str,
        params: &[Value],
    ) -> Result<bool, SieveError> {
        let rule = self.locator.get(name)?;
        let mut binding = Binding::value(value);
        Ok(rules::invoke(rule.as_ref(), mode, &mut binding, params))
    }

    /// The full field -> messages mapping from the most recent run.
    pub fn messages(&self) -> &FieldMessages {
        &self.messages
    }

    /// The most recent run's messages for one field, empty if it passed.
    pub fn messages_for(&self, field: &str) -> &[String] {
        self.messages.get(field)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
