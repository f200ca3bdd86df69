//! # Pixelflow - Per-pixel Color Filter Pipelines
//!
//! Pixelflow applies parameterized color transformations, in a chosen order,
//! to every pixel of an in-memory RGBA image.
//!
//! ## Features
//!
//! - **Uniform filter contract**: every filter is a selection predicate plus a
//!   pure transform, through the [`PixelFilter`](filters::PixelFilter) trait
//! - **Named registry**: default configurations looked up by name ("BW",
//!   "More Red", "50% Brightness", "50% Brighter", "Balance")
//! - **Pipelines**: ordered, sequential composition of filters
//! - **Parallel processing**: the pixel loop is split across rayon workers
//! - **Configuration**: extra filters and pipelines declared in TOML
//!
//! ## Quick Start
//!
//! ```rust
//! use pixelflow::prelude::*;
//!
//! let registry = FilterRegistry::with_defaults();
//! let pipeline = registry.pipeline(["More Red", "BW"]).unwrap();
//!
//! let image = vec![Pixel::new(128, 64, 32, 255); 4];
//! let processed = ImageProcessor::new().process(&image, 2, 2, &pipeline).unwrap();
//!
//! assert_eq!(processed[0], Pixel::new(78, 78, 78, 255));
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: pixels, clamping, buffers and error types
//! - [`filters`]: the filter trait, built-in filters, specs and the registry
//! - [`execution`]: pipelines and the image processor
//! - [`config`]: TOML configuration
//! - [`io`]: conversion to and from the `image` crate

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod execution;
pub mod filters;
pub mod io;

/// Prelude module for convenient imports.
///
/// Import everything commonly needed with:
/// ```rust
/// use pixelflow::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::core::buffer::PixelBuffer;
    pub use crate::core::pixel::{clamp, clamp_rounded, Pixel};

    // Errors
    pub use crate::core::error::{
        ConfigError, FilterError, FilterResult, PixelflowError, PixelflowResult,
    };

    // Filters
    pub use crate::filters::filter::{FilterRef, PixelFilter};
    pub use crate::filters::registry::FilterRegistry;
    pub use crate::filters::spec::FilterSpec;

    // Built-in filters
    pub use crate::filters::builtin::{
        Balance, BlackAndWhite, EnhancedRed, HalfBrighter, HalfBrightness, LumaRange,
    };

    // Execution
    pub use crate::execution::pipeline::Pipeline;
    pub use crate::execution::processor::{ImageProcessor, ProcessStats, ProcessorOptions};

    // Configuration
    pub use crate::config::Config;
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
