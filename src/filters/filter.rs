//! The per-pixel filter contract.

use crate::core::pixel::Pixel;
use std::fmt;
use std::sync::Arc;

/// A configured, stateless color transform with a selection predicate.
///
/// Implementors hold only immutable configuration fixed at construction,
/// which is why the trait requires `Send + Sync`: one instance is shared
/// read-only by every worker of the image processor.
///
/// # Example
///
/// ```
/// use pixelflow::prelude::*;
///
/// #[derive(Debug)]
/// struct Invert;
///
/// impl PixelFilter for Invert {
///     fn name(&self) -> &str {
///         "invert"
///     }
///
///     fn apply(&self, pixel: Pixel) -> Pixel {
///         pixel.map_rgb(|c| 255 - c)
///     }
/// }
///
/// assert_eq!(Invert.apply(Pixel::rgb(0, 10, 255)), Pixel::rgb(255, 245, 0));
/// ```
pub trait PixelFilter: Send + Sync + fmt::Debug {
    /// Short identifier of the filter kind (not its registry name).
    fn name(&self) -> &str;

    /// Whether this filter should transform `pixel`.
    fn matches(&self, _pixel: Pixel) -> bool {
        true
    }

    /// Transform a pixel. Must be total and depend only on `pixel`.
    fn apply(&self, pixel: Pixel) -> Pixel;

    /// Apply the filter only when it matches; otherwise return `pixel` unchanged.
    fn apply_if_matching(&self, pixel: Pixel) -> Pixel {
        if self.matches(pixel) {
            self.apply(pixel)
        } else {
            pixel
        }
    }
}

/// Shared handle to a filter, the value type of the registry and pipelines.
pub type FilterRef = Arc<dyn PixelFilter>;

impl<F: PixelFilter + ?Sized> PixelFilter for Arc<F> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn matches(&self, pixel: Pixel) -> bool {
        (**self).matches(pixel)
    }

    fn apply(&self, pixel: Pixel) -> Pixel {
        (**self).apply(pixel)
    }
}
