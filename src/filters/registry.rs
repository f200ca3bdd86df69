//! Filter registry mapping names to configured filters.

use crate::core::error::{FilterError, FilterResult};
use crate::execution::pipeline::Pipeline;
use crate::filters::filter::{FilterRef, PixelFilter};
use indexmap::IndexMap;
use log::debug;
use std::sync::Arc;

/// Registry of named, fully configured filters.
///
/// The registry is an ordinary value: build one (usually with
/// [`FilterRegistry::with_defaults`]), register any extra configurations
/// during setup, then share it read-only while processing.
#[derive(Debug, Clone)]
pub struct FilterRegistry {
    /// Filters keyed by name, in registration order.
    filters: IndexMap<String, FilterRef>,
}

impl FilterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            filters: IndexMap::new(),
        }
    }

    /// Create a registry seeded with the default configurations:
    /// "BW", "More Red", "50% Brightness", "50% Brighter" and "Balance".
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        crate::filters::builtin::register_all(&mut registry);
        registry
    }

    /// Register `filter` under `name`, replacing any previous entry.
    ///
    /// A replaced entry keeps its original position in [`names`](Self::names).
    pub fn register(&mut self, name: impl Into<String>, filter: FilterRef) {
        let name = name.into();
        if let Some(previous) = self.filters.insert(name.clone(), filter) {
            debug!("Replaced filter '{}' (was {})", name, previous.name());
        } else {
            debug!("Registered filter '{}'", name);
        }
    }

    /// Register a concrete filter value, wrapping it in an `Arc`.
    pub fn register_filter<F>(&mut self, name: impl Into<String>, filter: F)
    where
        F: PixelFilter + 'static,
    {
        self.register(name, Arc::new(filter));
    }

    /// Look up the filter registered under exactly `name`.
    pub fn lookup(&self, name: &str) -> FilterResult<FilterRef> {
        self.filters
            .get(name)
            .cloned()
            .ok_or_else(|| FilterError::not_found(name))
    }

    /// Build a pipeline from registered names, in the given order.
    ///
    /// Fails on the first unknown name.
    pub fn pipeline<I, S>(&self, names: I) -> FilterResult<Pipeline>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| self.lookup(name.as_ref()))
            .collect::<FilterResult<Vec<_>>>()
            .map(Pipeline::new)
    }

    /// Check if a name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.filters.contains_key(name)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.filters.keys().map(|s| s.as_str())
    }

    /// Remove a registration. Returns the removed filter, if any.
    pub fn unregister(&mut self, name: &str) -> Option<FilterRef> {
        self.filters.shift_remove(name)
    }

    /// Get the total number of registered filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
