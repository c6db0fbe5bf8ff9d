//! FILENAME: core/totals-engine/src/localize.rs
//! PURPOSE: Resolution of message keys into display strings.
//! CONTEXT: The host normally supplies its own localization function; any
//! `Fn(&str) -> String` closure works. `MessageCatalog` is a small flat
//! key/value implementation used when no host formatter is available.

use std::path::Path;

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::log_warn;
use crate::total_type::DROPDOWN_HEADING_KEY;

/// Resolves a message key to a display string.
pub trait Localize {
    fn localize(&self, key: &str) -> String;
}

impl<F> Localize for F
where
    F: Fn(&str) -> String,
{
    fn localize(&self, key: &str) -> String {
        self(key)
    }
}

const ENGLISH_MESSAGES: &[(&str, &str)] = &[
    (DROPDOWN_HEADING_KEY, "Totals"),
    ("visualizations.totals.funcTitle.sum", "Sum"),
    ("visualizations.totals.funcTitle.avg", "Avg"),
    ("visualizations.totals.funcTitle.min", "Min"),
    ("visualizations.totals.funcTitle.max", "Max"),
    ("visualizations.totals.funcTitle.nat", "Rollup (Total)"),
    ("visualizations.totals.funcTitle.med", "Median"),
    ("visualizations.totals.funcAlias.sum", "Sum"),
    ("visualizations.totals.funcAlias.avg", "Avg"),
    ("visualizations.totals.funcAlias.min", "Min"),
    ("visualizations.totals.funcAlias.max", "Max"),
    ("visualizations.totals.funcAlias.nat", "Total"),
    ("visualizations.totals.funcAlias.med", "Median"),
];

static ENGLISH: Lazy<MessageCatalog> = Lazy::new(|| {
    MessageCatalog::from_pairs(ENGLISH_MESSAGES.iter().copied())
});

/// Flat message catalog. Missing keys resolve to the key itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageCatalog {
    messages: FxHashMap<String, String>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in English bundle.
    pub fn english() -> Self {
        ENGLISH.clone()
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        MessageCatalog {
            messages: pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Parse a flat JSON object of `"key": "message"` pairs.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.messages.insert(key.into(), message.into());
    }

    /// Layer `other` on top of this catalog; its entries win.
    pub fn merge(&mut self, other: MessageCatalog) {
        self.messages.extend(other.messages);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Localize for MessageCatalog {
    fn localize(&self, key: &str) -> String {
        match self.get(key) {
            Some(message) => message.to_string(),
            None => {
                log_warn!("I18N", "missing message for key {}", key);
                key.to_string()
            }
        }
    }
}
