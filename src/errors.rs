//! errors.rs - Custom error types for the fieldsieve library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//! Only configuration and usage defects surface here; a rule that rejects a
//! value is never an error, it is a recorded message.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `fieldsieve` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SieveError {
    /// A rule spec names a rule the locator does not know. This is a
    /// configuration defect, not a per-record validation outcome, so it
    /// aborts the run instead of being absorbed into the messages.
    #[error("Unknown rule '{0}' in filter chain")]
    UnknownRule(String),

    /// The record handed to a run was not a keyed structure.
    #[error("Record is not a keyed structure: {0}")]
    InvalidRecord(String),

    /// A typed record could not be round-tripped through its keyed form.
    #[error("Failed to serialize record for filtering: {0}")]
    SerializationError(String),
}
