//! Pipeline composition and the image processing loop.

pub mod pipeline;
pub mod processor;

pub use pipeline::Pipeline;
pub use processor::{ImageProcessor, ProcessStats, ProcessorOptions};
