//! `{{config.*}}` placeholder substitution
//!
//! Help text may reference the read-only configuration through a small
//! named-placeholder syntax, e.g. `{{config.bin}}`. Substitution is a
//! restricted replace-loop over known keys, not an expression language;
//! unknown placeholders are left intact rather than erroring.

use std::collections::HashMap;

use crate::article::ListEntry;
use crate::config::Config;

/// Read-only substitution context for help text placeholders.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    values: HashMap<String, String>,
}

impl TemplateContext {
    /// Build the context from configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut ctx = Self::default();
        ctx.set("config.bin", config.general.bin.clone());
        ctx.set("config.version", config.general.version.clone());
        ctx
    }

    /// Register a substitution value for `{{key}}`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Substitute all known `{{key}}` placeholders in `input`.
    #[must_use]
    pub fn expand(&self, input: &str) -> String {
        let mut output = input.to_string();
        for (key, value) in &self.values {
            output = output.replace(&format!("{{{{{key}}}}}"), value);
        }
        output
    }

    /// Substitute placeholders on both sides of a list entry.
    #[must_use]
    pub fn expand_entry(&self, entry: &ListEntry) -> ListEntry {
        ListEntry {
            label: entry.label.as_deref().map(|s| self.expand(s)),
            description: entry.description.as_deref().map(|s| self.expand(s)),
        }
    }
}
