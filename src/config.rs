//! TOML configuration: processor options, named filters and named pipelines.
//!
//! ```toml
//! [processing]
//! parallel = true
//! chunk_size = 4096
//!
//! [filters."Deep Red"]
//! kind = "enhanced_red"
//! shift = 40
//!
//! [pipelines]
//! "Warm Gray" = ["Deep Red", "Balance", "BW"]
//! ```

use crate::core::error::{ConfigError, ConfigResult};
use crate::execution::processor::ProcessorOptions;
use crate::filters::registry::FilterRegistry;
use crate::filters::spec::FilterSpec;
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Options for the image processor.
    pub processing: ProcessorOptions,
    /// Extra named filters, in file order.
    pub filters: IndexMap<String, FilterSpec>,
    /// Named pipelines as lists of registered names, in file order.
    pub pipelines: IndexMap<String, Vec<String>>,
}

impl Config {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(
            "Loaded config '{}' ({} filters, {} pipelines)",
            path.display(),
            config.filters.len(),
            config.pipelines.len()
        );
        Ok(config)
    }

    /// Register this config's filters, then its pipelines, into `registry`.
    ///
    /// Filters replace any existing entry of the same name. A pipeline may
    /// reference any registered filter or a pipeline defined before it.
    /// Every spec is validated before the registry is touched.
    pub fn apply_to(&self, registry: &mut FilterRegistry) -> ConfigResult<()> {
        let filters = self
            .filters
            .iter()
            .map(|(name, spec)| spec.build().map(|filter| (name, filter)))
            .collect::<ConfigResult<Vec<_>>>()?;

        for (name, filter) in filters {
            registry.register(name.clone(), filter);
        }

        for (name, stages) in &self.pipelines {
            let pipeline = registry.pipeline(stages)?;
            registry.register(name.clone(), Arc::new(pipeline));
        }

        Ok(())
    }

    /// Build a registry holding the defaults plus everything in this config.
    pub fn registry(&self) -> ConfigResult<FilterRegistry> {
        let mut registry = FilterRegistry::with_defaults();
        self.apply_to(&mut registry)?;
        Ok(registry)
    }
}
