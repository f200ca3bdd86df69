//! Filter module.
//!
//! Contains the filter contract, the filter registry, serializable filter
//! specs and the built-in filter implementations.

pub mod builtin;
pub mod filter;
pub mod registry;
pub mod spec;

pub use filter::{FilterRef, PixelFilter};
pub use registry::FilterRegistry;
pub use spec::FilterSpec;
