//! Image processor: drives a filter over every pixel of a buffer.
//!
//! Each output pixel depends only on the input pixel at the same index, so
//! the buffer is split into contiguous chunks that rayon workers transform
//! without synchronization. Shape checks happen before any work starts and
//! the caller's buffer is never written to.

use crate::core::buffer::{check_dimensions, PixelBuffer};
use crate::core::error::FilterResult;
use crate::core::pixel::Pixel;
use crate::filters::filter::PixelFilter;
use crate::filters::registry::FilterRegistry;
use log::{debug, trace, warn};
use rayon::prelude::*;
use rayon::ThreadPool;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Default number of pixels per parallel work unit.
pub const DEFAULT_CHUNK_SIZE: usize = 16 * 1024;

/// Processor options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessorOptions {
    /// Whether to split the buffer across worker threads.
    pub parallel: bool,
    /// Maximum number of worker threads (0 = rayon's global pool).
    pub max_threads: usize,
    /// Pixels per parallel work unit.
    pub chunk_size: usize,
}

impl Default for ProcessorOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            max_threads: 0,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl ProcessorOptions {
    /// Create options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable/disable parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set maximum threads.
    pub fn with_max_threads(mut self, max: usize) -> Self {
        self.max_threads = max;
        self
    }

    /// Set the number of pixels per work unit.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    fn effective_chunk_size(&self) -> usize {
        if self.chunk_size == 0 {
            warn!("chunk_size of 0 is invalid, using 1");
            1
        } else {
            self.chunk_size
        }
    }
}

/// Summary of one processing call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessStats {
    /// Pixels visited.
    pub pixels: usize,
    /// Work units the buffer was split into.
    pub chunks: usize,
    /// Wall-clock time spent transforming.
    pub duration: Duration,
}

/// Applies a filter or pipeline to whole pixel buffers.
///
/// When `max_threads` is set, the worker pool is built once here and shared
/// by every call (and every clone of the processor).
#[derive(Debug, Clone, Default)]
pub struct ImageProcessor {
    options: ProcessorOptions,
    pool: Option<Arc<ThreadPool>>,
}

impl ImageProcessor {
    /// Create a processor with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a processor with custom options.
    ///
    /// If a dedicated pool of `max_threads` workers cannot be built, the
    /// processor falls back to rayon's global pool.
    pub fn with_options(options: ProcessorOptions) -> Self {
        let pool = if options.parallel && options.max_threads > 0 {
            match rayon::ThreadPoolBuilder::new()
                .num_threads(options.max_threads)
                .build()
            {
                Ok(pool) => Some(Arc::new(pool)),
                Err(e) => {
                    warn!(
                        "Failed to build a {}-thread pool, using the global pool: {}",
                        options.max_threads, e
                    );
                    None
                }
            }
        } else {
            None
        };

        Self { options, pool }
    }

    /// The active options.
    pub fn options(&self) -> &ProcessorOptions {
        &self.options
    }

    /// Apply `filter` to every pixel of a `width`×`height` buffer.
    ///
    /// Returns a new buffer of the same length where pixel `i` is
    /// `filter.apply(buffer[i])` if the filter matches it, and `buffer[i]`
    /// otherwise. Fails with `MalformedInput` before doing any work when
    /// `buffer.len() != width * height`.
    pub fn process<F>(
        &self,
        buffer: &[Pixel],
        width: usize,
        height: usize,
        filter: &F,
    ) -> FilterResult<Vec<Pixel>>
    where
        F: PixelFilter + ?Sized,
    {
        self.process_with_stats(buffer, width, height, filter)
            .map(|(pixels, _)| pixels)
    }

    /// Like [`process`](Self::process), also returning timing information.
    pub fn process_with_stats<F>(
        &self,
        buffer: &[Pixel],
        width: usize,
        height: usize,
        filter: &F,
    ) -> FilterResult<(Vec<Pixel>, ProcessStats)>
    where
        F: PixelFilter + ?Sized,
    {
        check_dimensions(width, height, buffer.len())?;

        let start = Instant::now();
        let mut output = buffer.to_vec();
        let chunks = self.run(&mut output, filter);

        let stats = ProcessStats {
            pixels: output.len(),
            chunks,
            duration: start.elapsed(),
        };
        debug!(
            "Applied '{}' to {}x{} image in {:?} ({} chunks)",
            filter.name(),
            width,
            height,
            stats.duration,
            stats.chunks
        );
        Ok((output, stats))
    }

    /// Apply `filter` to an owned buffer, producing a new one of the same shape.
    pub fn process_buffer<F>(&self, buffer: &PixelBuffer, filter: &F) -> FilterResult<PixelBuffer>
    where
        F: PixelFilter + ?Sized,
    {
        self.process_buffer_with_stats(buffer, filter)
            .map(|(output, _)| output)
    }

    /// Like [`process_buffer`](Self::process_buffer), also returning timing
    /// information.
    pub fn process_buffer_with_stats<F>(
        &self,
        buffer: &PixelBuffer,
        filter: &F,
    ) -> FilterResult<(PixelBuffer, ProcessStats)>
    where
        F: PixelFilter + ?Sized,
    {
        let (pixels, stats) =
            self.process_with_stats(buffer.pixels(), buffer.width(), buffer.height(), filter)?;
        Ok((PixelBuffer::new(buffer.width(), buffer.height(), pixels)?, stats))
    }

    /// Resolve `name` in `registry` and apply it.
    ///
    /// Both the name and the buffer shape are checked before any pixel work.
    pub fn process_named(
        &self,
        registry: &FilterRegistry,
        name: &str,
        buffer: &[Pixel],
        width: usize,
        height: usize,
    ) -> FilterResult<Vec<Pixel>> {
        let filter = registry.lookup(name)?;
        self.process(buffer, width, height, &filter)
    }

    /// Transform `pixels` in place, returning the number of chunks used.
    fn run<F>(&self, pixels: &mut [Pixel], filter: &F) -> usize
    where
        F: PixelFilter + ?Sized,
    {
        if !self.options.parallel || pixels.len() <= 1 {
            apply_chunk(pixels, filter);
            return 1;
        }

        let chunk_size = self.options.effective_chunk_size();
        let chunks = pixels.len().div_ceil(chunk_size);

        match &self.pool {
            Some(pool) => pool.install(|| apply_parallel(pixels, chunk_size, filter)),
            None => apply_parallel(pixels, chunk_size, filter),
        }

        chunks
    }
}

fn apply_parallel<F>(pixels: &mut [Pixel], chunk_size: usize, filter: &F)
where
    F: PixelFilter + ?Sized,
{
    pixels.par_chunks_mut(chunk_size).enumerate().for_each(|(i, chunk)| {
        trace!("chunk {} ({} pixels)", i, chunk.len());
        apply_chunk(chunk, filter);
    });
}

fn apply_chunk<F>(pixels: &mut [Pixel], filter: &F)
where
    F: PixelFilter + ?Sized,
{
    for pixel in pixels.iter_mut() {
        *pixel = filter.apply_if_matching(*pixel);
    }
}
