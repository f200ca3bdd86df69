//! Pixel-conditional filters.

use crate::core::pixel::Pixel;
use crate::filters::filter::{FilterRef, PixelFilter};

/// Applies an inner filter only to pixels whose luma lies in `[min, max]`.
///
/// Luma is the rounded mean of the color channels, the same gray level
/// [`BlackAndWhite`](super::BlackAndWhite) produces.
#[derive(Debug, Clone)]
pub struct LumaRange {
    min: u8,
    max: u8,
    inner: FilterRef,
}

impl LumaRange {
    /// Wrap `inner`. An empty range (`min > max`) never matches.
    pub fn new(min: u8, max: u8, inner: FilterRef) -> Self {
        Self { min, max, inner }
    }

    /// Only pixels at or above `min`.
    pub fn above(min: u8, inner: FilterRef) -> Self {
        Self::new(min, u8::MAX, inner)
    }

    /// Only pixels at or below `max`.
    pub fn below(max: u8, inner: FilterRef) -> Self {
        Self::new(u8::MIN, max, inner)
    }

    /// Inclusive luma bounds.
    pub fn bounds(&self) -> (u8, u8) {
        (self.min, self.max)
    }
}

impl PixelFilter for LumaRange {
    fn name(&self) -> &str {
        "luma_range"
    }

    fn matches(&self, pixel: Pixel) -> bool {
        (self.min..=self.max).contains(&pixel.luma()) && self.inner.matches(pixel)
    }

    fn apply(&self, pixel: Pixel) -> Pixel {
        self.inner.apply(pixel)
    }
}
