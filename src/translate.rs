//! translate.rs - Message catalog: rendering failure messages from keys.
//!
//! Every rule carries a default message key; the engine renders that key
//! (or a per-field override key) through a [`MessageCatalog`] together with
//! the failing spec's parameters. The bundled [`Translator`] holds a table
//! of `tinytemplate` templates in which the spec's positional parameters
//! are available as `{p0}`, `{p1}`, and so on.
//!
//! A key with no template renders verbatim. That fallback is deliberate:
//! per-field override keys are frequently application-specific strings that
//! never enter a catalog, and they must still come out usable.
//!
//! License: MIT OR APACHE 2.0

use log::warn;
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;
use tinytemplate::TinyTemplate;

/// Renders a message key plus positional parameters into a human-readable,
/// locale-specific string.
pub trait MessageCatalog: Send + Sync {
    /// Renders `key` with `params` substituted positionally.
    fn render(&self, key: &str, params: &[Value]) -> String;
}

/// The default en-US templates, one per built-in rule message key.
static EN_US: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("FILTER_ALNUM", "Please use only alphanumeric characters."),
        ("FILTER_ALPHA", "Please use only alphabetic characters."),
        ("FILTER_BETWEEN", "Please use a value between {p0} and {p1}."),
        ("FILTER_BLANK", "Please leave this field blank."),
        ("FILTER_INT", "Please use only whole numbers."),
        ("FILTER_MAX", "Please use a value no greater than {p0}."),
        ("FILTER_MIN", "Please use a value no less than {p0}."),
        ("FILTER_REGEX", "Please use the correct format."),
        ("FILTER_STRICT_EQUAL_TO_VALUE", "Please use exactly the value {p0}."),
        ("FILTER_STRING", "Please use a string."),
        ("FILTER_STRLEN", "Please use exactly {p0} character(s)."),
        ("FILTER_STRLEN_MIN", "Please use at least {p0} character(s)."),
    ])
});

/// A template-table [`MessageCatalog`].
pub struct Translator {
    templates: HashMap<String, String>,
}

impl Translator {
    /// Builds a translator from an arbitrary key -> template table.
    pub fn new<K, V>(templates: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            templates: templates
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// The bundled en-US catalog covering every built-in rule.
    pub fn en_us() -> Self {
        Self::new(EN_US.iter().map(|(k, v)| (*k, *v)))
    }
}

impl MessageCatalog for Translator {
    fn render(&self, key: &str, params: &[Value]) -> String {
        let Some(template) = self.templates.get(key) else {
            return key.to_string();
        };

        let mut tt = TinyTemplate::new();
        tt.set_default_formatter(&tinytemplate::format_unescaped);
        if let Err(e) = tt.add_template("message", template) {
            warn!("Failed to parse message template for '{key}': {e}");
            return key.to_string();
        }

        let context: HashMap<String, &Value> = params
            .iter()
            .enumerate()
            .map(|(i, value)| (format!("p{i}"), value))
            .collect();

        match tt.render("message", &context) {
            Ok(rendered) => rendered,
            Err(e) => {
                warn!("Failed to render message template for '{key}': {e}");
                key.to_string()
            }
        }
    }
}
