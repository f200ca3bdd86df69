//! Owned, shape-checked pixel buffers.

use crate::core::error::{FilterError, FilterResult};
use crate::core::pixel::Pixel;

/// Check that a flat buffer of `len` pixels describes a `width`×`height` image.
///
/// Returns the expected pixel count on success.
pub fn check_dimensions(width: usize, height: usize, len: usize) -> FilterResult<usize> {
    let expected = width.checked_mul(height).ok_or_else(|| {
        FilterError::malformed(format!("dimensions {}x{} overflow", width, height))
    })?;

    if expected != len {
        return Err(FilterError::malformed(format!(
            "buffer holds {} pixels but {}x{} requires {}",
            len, width, height, expected
        )));
    }

    Ok(expected)
}

/// A row-major, top-left-origin RGBA image.
///
/// The constructor enforces `pixels.len() == width * height`, so every
/// `PixelBuffer` in existence is well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

impl PixelBuffer {
    /// Wrap a flat pixel vector.
    pub fn new(width: usize, height: usize, pixels: Vec<Pixel>) -> FilterResult<Self> {
        check_dimensions(width, height, pixels.len())?;
        Ok(Self { width, height, pixels })
    }

    /// Create a buffer filled with a single pixel value.
    pub fn filled(width: usize, height: usize, pixel: Pixel) -> FilterResult<Self> {
        let len = width.checked_mul(height).ok_or_else(|| {
            FilterError::malformed(format!("dimensions {}x{} overflow", width, height))
        })?;
        Ok(Self {
            width,
            height,
            pixels: vec![pixel; len],
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total pixel count.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// True for a zero-area image.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Flat index of `(column, row)`.
    pub fn index_of(&self, column: usize, row: usize) -> Option<usize> {
        (column < self.width && row < self.height).then(|| row * self.width + column)
    }

    /// Pixel at `(column, row)`.
    pub fn get(&self, column: usize, row: usize) -> Option<Pixel> {
        self.index_of(column, row).map(|i| self.pixels[i])
    }

    /// Overwrite the pixel at `(column, row)`. Returns false when out of bounds.
    pub fn set(&mut self, column: usize, row: usize, pixel: Pixel) -> bool {
        match self.index_of(column, row) {
            Some(i) => {
                self.pixels[i] = pixel;
                true
            }
            None => false,
        }
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Consume the buffer, returning its pixels.
    pub fn into_pixels(self) -> Vec<Pixel> {
        self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_dimensions() {
        assert_eq!(check_dimensions(3, 2, 6), Ok(6));
        assert_eq!(check_dimensions(0, 5, 0), Ok(0));
        assert!(check_dimensions(3, 2, 5).unwrap_err().is_malformed_input());
        assert!(check_dimensions(usize::MAX, 2, 0).unwrap_err().is_malformed_input());
    }

    #[test]
    fn test_new_rejects_mismatch() {
        let result = PixelBuffer::new(2, 2, vec![Pixel::default(); 3]);
        assert!(matches!(result, Err(FilterError::MalformedInput { .. })));
    }

    #[test]
    fn test_row_major_addressing() {
        let pixels = (0..6u8).map(|i| Pixel::rgb(i, 0, 0)).collect();
        let mut buffer = PixelBuffer::new(3, 2, pixels).unwrap();

        assert_eq!(buffer.index_of(1, 1), Some(4));
        assert_eq!(buffer.get(2, 0).unwrap().red, 2);
        assert_eq!(buffer.get(0, 1).unwrap().red, 3);
        assert_eq!(buffer.get(3, 0), None);

        assert!(buffer.set(0, 0, Pixel::rgb(9, 9, 9)));
        assert!(!buffer.set(0, 2, Pixel::rgb(9, 9, 9)));
        assert_eq!(buffer.pixels()[0], Pixel::rgb(9, 9, 9));
    }

    #[test]
    fn test_filled() {
        let buffer = PixelBuffer::filled(4, 3, Pixel::rgb(1, 2, 3)).unwrap();
        assert_eq!(buffer.len(), 12);
        assert!(buffer.pixels().iter().all(|p| *p == Pixel::rgb(1, 2, 3)));
        assert!(PixelBuffer::filled(0, 0, Pixel::default()).unwrap().is_empty());
    }
}
