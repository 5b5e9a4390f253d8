// fieldsieve/src/lib.rs
//! # Fieldsieve
//!
//! `fieldsieve` validates and sanitizes the fields of a structured record
//! against ordered chains of named rules, aggregating human-readable failure
//! messages per field. It targets form and record processing: the caller
//! registers rule specs on a [`FilterEngine`], hands it a record, and gets
//! back a pass/fail verdict plus per-field message lists, with fields
//! optionally rewritten in place by sanitizing rules.
//!
//! The library is synchronous and stateless between runs apart from the
//! registered specs; it performs no I/O and carries no application state.
//!
//! ## Modules
//!
//! * `chain`: Rule spec bookkeeping (`RuleSpec`, `InvocationMode`,
//!   `ChainType`) and per-field message aggregation (`FieldMessages`).
//! * `engine`: The `FilterEngine` orchestrator that walks the chains.
//! * `locator`: Lookup-by-name construction of fresh rule instances.
//! * `record`: The record boundary: value bindings and the blank notion.
//! * `rules`: The `Rule` trait, the shared invocation layer, and the
//!   built-in rules.
//! * `translate`: The `MessageCatalog` trait and the bundled `Translator`.
//! * `errors`: The `SieveError` type for configuration and usage defects.
//!
//! ## Usage Example
//!
//! ```rust
//! use fieldsieve::{ChainType, FilterEngine, InvocationMode};
//! use anyhow::Result;
//! use serde_json::json;
//!
//! fn main() -> Result<()> {
//!     let mut filter = FilterEngine::with_defaults();
//!
//!     // Username must be alphanumeric (soft) and at least 6 chars (hard).
//!     filter.add_soft_rule("username", InvocationMode::Is, "alnum", vec![]);
//!     filter.add_hard_rule("username", InvocationMode::Is, "strlen_min", vec![json!(6)]);
//!     // Age arrives as a string from the form; coerce it in place.
//!     filter.add_hard_rule("age", InvocationMode::Fix, "int", vec![]);
//!
//!     let mut record = json!({ "username": "abc123", "age": "42" });
//!     let ok = filter.run(&mut record)?;
//!
//!     assert!(ok);
//!     assert_eq!(record["age"], json!(42));
//!     Ok(())
//! }
//! ```
//!
//! On failure, the engine reports one ordered message list per offending
//! field:
//!
//! ```rust
//! use fieldsieve::{FilterEngine, InvocationMode};
//! use serde_json::json;
//!
//! let mut filter = FilterEngine::with_defaults();
//! filter.add_soft_rule("username", InvocationMode::Is, "alnum", vec![]);
//! filter.add_hard_rule("username", InvocationMode::Is, "strlen_min", vec![json!(6)]);
//!
//! let mut record = json!({ "username": "a b" });
//! let ok = filter.run(&mut record).unwrap();
//!
//! assert!(!ok);
//! assert_eq!(
//!     filter.messages_for("username"),
//!     [
//!         "Please use only alphanumeric characters.",
//!         "Please use at least 6 character(s).",
//!     ]
//! );
//! ```
//!
//! ## Error Handling
//!
//! A rule rejecting a value is never an error; it is recorded as a message.
//! Only two conditions abort a run, both surfaced as [`SieveError`]: the
//! record not being a keyed structure, and a spec naming a rule the locator
//! does not know.
//!
//! ## Design Principles
//!
//! * **Pluggable rules:** Rules are resolved by name through an injectable
//!   [`RuleLocator`]; tests substitute fakes without touching the engine.
//! * **One invocation layer:** Negation and blank-bypass are implemented
//!   once, over every rule's two primitives.
//! * **In-place sanitizing:** Fixing specs write through to the caller's
//!   record before the next spec runs.
//!
//! ---
//! License: MIT OR APACHE 2.0

pub mod chain;
pub mod engine;
pub mod errors;
pub mod locator;
pub mod record;
pub mod rules;
pub mod translate;

/// Re-exports the spec bookkeeping and message aggregation types.
pub use chain::{ChainType, FieldMessages, InvocationMode, RuleSpec};

/// Re-exports the rule-chain orchestrator.
pub use engine::FilterEngine;

/// Re-exports the custom error type for clear error reporting.
pub use errors::SieveError;

/// Re-exports lookup-by-name rule construction.
pub use locator::{RuleFactory, RuleLocator};

/// Re-exports the record boundary helpers.
pub use record::{is_blank, Binding};

/// Re-exports the rule contract and the shared invocation entry point.
pub use rules::{invoke, Rule};

/// Re-exports message rendering.
pub use translate::{MessageCatalog, Translator};
