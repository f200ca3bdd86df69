//! Core types for the pixelflow filter pipeline.
//!
//! This module contains the foundational types:
//! - The `Pixel` value type and channel clamping
//! - Shape-checked pixel buffers
//! - Error types

pub mod buffer;
pub mod error;
pub mod pixel;

// Re-export commonly used types
pub use buffer::PixelBuffer;
pub use error::{ConfigError, FilterError, PixelflowError};
pub use pixel::{clamp, clamp_rounded, Pixel};
