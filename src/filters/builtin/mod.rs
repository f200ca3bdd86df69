//! Built-in filter implementations.
//!
//! This module contains the standard filters that ship with pixelflow.

mod color;
mod conditional;

use crate::filters::registry::FilterRegistry;

/// Register all default filter configurations.
pub fn register_all(registry: &mut FilterRegistry) {
    color::register(registry);
}

// Re-export for direct access
pub use color::{
    Balance, BlackAndWhite, EnhancedRed, HalfBrighter, HalfBrightness, DEFAULT_RED_SHIFT,
};
pub use conditional::LumaRange;
