//! locator.rs - Lookup-by-name construction of rule instances.
//!
//! The engine never holds rule instances; it holds names. At run time each
//! spec's name is resolved through a [`RuleLocator`], which maps names to
//! factory closures producing a fresh boxed [`Rule`] per invocation. The
//! locator is injected into the engine, so tests can substitute fakes
//! without touching the engine at all.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use std::collections::HashMap;

use crate::errors::SieveError;
use crate::rules::{
    Alnum, Alpha, Between, Blank, Int, Max, Min, RegexRule, Rule, StrictEqualToValue, StringRule,
    Strlen, StrlenMin,
};

/// A factory producing a fresh rule instance per invocation.
pub type RuleFactory = Box<dyn Fn() -> Box<dyn Rule> + Send + Sync>;

/// Maps rule names to factories. Unknown names surface as
/// [`SieveError::UnknownRule`], which the engine propagates rather than
/// recording as a validation failure.
#[derive(Default)]
pub struct RuleLocator {
    factories: HashMap<String, RuleFactory>,
}

impl RuleLocator {
    /// Creates an empty locator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a locator pre-loaded with every built-in rule under its
    /// snake_case name.
    pub fn with_default_rules() -> Self {
        let mut locator = Self::new();
        locator.set("alnum", || Box::new(Alnum));
        locator.set("alpha", || Box::new(Alpha));
        locator.set("between", || Box::new(Between));
        locator.set("blank", || Box::new(Blank));
        locator.set("int", || Box::new(Int));
        locator.set("max", || Box::new(Max));
        locator.set("min", || Box::new(Min));
        locator.set("regex", || Box::new(RegexRule));
        locator.set("strict_equal_to_value", || Box::new(StrictEqualToValue));
        locator.set("string", || Box::new(StringRule));
        locator.set("strlen", || Box::new(Strlen));
        locator.set("strlen_min", || Box::new(StrlenMin));
        locator
    }

    /// Registers (or replaces) a factory under `name`.
    pub fn set(
        &mut self,
        name: impl Into<String>,
        factory: impl Fn() -> Box<dyn Rule> + Send + Sync + 'static,
    ) {
        let name = name.into();
        debug!("Registering rule factory '{name}'");
        self.factories.insert(name, Box::new(factory));
    }

    /// Constructs a fresh instance of the rule registered under `name`.
    pub fn get(&self, name: &str) -> Result<Box<dyn Rule>, SieveError> {
        self.factories
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| SieveError::UnknownRule(name.to_string()))
    }

    /// True if a factory is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_resolve() {
        let locator = RuleLocator::with_default_rules();
        for name in [
            "alnum",
            "alpha",
            "between",
            "blank",
            "int",
            "max",
            "min",
            "regex",
            "strict_equal_to_value",
            "string",
            "strlen",
            "strlen_min",
        ] {
            assert!(locator.get(name).is_ok(), "rule '{name}' should resolve");
        }
    }

    #[test]
    fn unknown_name_is_an_error() {
        let locator = RuleLocator::with_default_rules();
        let err = locator.get("no_such_rule").unwrap_err();
        assert!(matches!(err, SieveError::UnknownRule(name) if name == "no_such_rule"));
    }
}
