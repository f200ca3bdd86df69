//! Serializable filter descriptions.
//!
//! A [`FilterSpec`] names a filter kind and its parameters so that filter
//! configurations can live in TOML config files or be passed as JSON on the
//! command line:
//!
//! ```toml
//! kind = "luma_range"
//! min = 128
//! max = 255
//! filter = { kind = "enhanced_red", shift = 40 }
//! ```

use crate::core::error::{ConfigError, ConfigResult};
use crate::filters::builtin::{
    Balance, BlackAndWhite, EnhancedRed, HalfBrighter, HalfBrightness, LumaRange,
};
use crate::filters::filter::FilterRef;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Description of a configured filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterSpec {
    /// [`EnhancedRed`] with the given shift.
    EnhancedRed { shift: i32 },
    /// [`BlackAndWhite`].
    BlackAndWhite,
    /// [`HalfBrightness`].
    HalfBrightness,
    /// [`HalfBrighter`].
    HalfBrighter,
    /// [`Balance`].
    Balance,
    /// [`LumaRange`] around another spec.
    LumaRange {
        #[serde(default)]
        min: u8,
        #[serde(default = "max_luma")]
        max: u8,
        filter: Box<FilterSpec>,
    },
}

fn max_luma() -> u8 {
    u8::MAX
}

impl FilterSpec {
    /// Parse a spec from JSON, e.g. `{"kind": "enhanced_red", "shift": 25}`.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check parameters that the type system cannot.
    pub fn validate(&self) -> ConfigResult<()> {
        match self {
            FilterSpec::LumaRange { min, max, filter } => {
                if min > max {
                    return Err(ConfigError::InvalidSpec(format!(
                        "luma_range min ({}) is greater than max ({})",
                        min, max
                    )));
                }
                filter.validate()
            }
            _ => Ok(()),
        }
    }

    /// Construct the described filter.
    pub fn build(&self) -> ConfigResult<FilterRef> {
        self.validate()?;
        Ok(self.instantiate())
    }

    fn instantiate(&self) -> FilterRef {
        match self {
            FilterSpec::EnhancedRed { shift } => Arc::new(EnhancedRed::new(*shift)),
            FilterSpec::BlackAndWhite => Arc::new(BlackAndWhite),
            FilterSpec::HalfBrightness => Arc::new(HalfBrightness),
            FilterSpec::HalfBrighter => Arc::new(HalfBrighter),
            FilterSpec::Balance => Arc::new(Balance),
            FilterSpec::LumaRange { min, max, filter } => {
                Arc::new(LumaRange::new(*min, *max, filter.instantiate()))
            }
        }
    }
}
