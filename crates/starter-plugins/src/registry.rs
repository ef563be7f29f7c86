//! Plugin registry.
//!
//! An explicitly constructed catalog of the available feature plugins,
//! keyed by slug. Built once in the CLI entry point and passed down;
//! read-only after startup, nothing registers at import time.

use std::collections::BTreeMap;

use crate::builtins;
use crate::plugin::FeaturePlugin;

/// Catalog of available feature plugins.
pub struct PluginRegistry {
    plugins: BTreeMap<String, Box<dyn FeaturePlugin>>,
}

impl PluginRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            plugins: BTreeMap::new(),
        }
    }

    /// Create a registry pre-populated with all built-in plugins.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for plugin in builtins::builtin_plugins() {
            registry.register(plugin);
        }
        registry
    }

    /// Register a plugin under its slug.
    pub fn register(&mut self, plugin: Box<dyn FeaturePlugin>) {
        self.plugins.insert(plugin.slug().to_string(), plugin);
    }

    /// Look up a plugin by slug.
    pub fn get(&self, slug: &str) -> Option<&dyn FeaturePlugin> {
        self.plugins.get(slug).map(|p| p.as_ref())
    }

    /// Check if a plugin is registered.
    pub fn contains(&self, slug: &str) -> bool {
        self.plugins.contains_key(slug)
    }

    /// Get the number of registered plugins.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// List all registered slugs (sorted).
    pub fn list(&self) -> Vec<&str> {
        self.plugins.keys().map(|s| s.as_str()).collect()
    }

    /// Iterate plugins in slug order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn FeaturePlugin> {
        self.plugins.values().map(|p| p.as_ref())
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}
