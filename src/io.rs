//! Conversion between [`PixelBuffer`] and the `image` crate.
//!
//! The filter core only sees decoded RGBA pixels; this module is the codec
//! collaborator used by the command-line tool to read and write files.

use crate::core::buffer::PixelBuffer;
use crate::core::error::{FilterError, PixelflowError, PixelflowResult};
use crate::core::pixel::Pixel;
use image::{DynamicImage, Rgba, RgbaImage};
use log::debug;
use std::path::Path;

/// Copy an RGBA image into a pixel buffer.
pub fn from_rgba_image(image: &RgbaImage) -> PixelflowResult<PixelBuffer> {
    let pixels = image.pixels().map(|Rgba(channels)| Pixel::from(*channels)).collect();
    Ok(PixelBuffer::new(image.width() as usize, image.height() as usize, pixels)?)
}

/// Copy a pixel buffer into an RGBA image.
pub fn to_rgba_image(buffer: &PixelBuffer) -> PixelflowResult<RgbaImage> {
    let width = u32::try_from(buffer.width())
        .map_err(|_| FilterError::malformed(format!("width {} exceeds u32", buffer.width())))?;
    let height = u32::try_from(buffer.height())
        .map_err(|_| FilterError::malformed(format!("height {} exceeds u32", buffer.height())))?;

    let raw: Vec<u8> = buffer.pixels().iter().flat_map(|p| p.to_array()).collect();
    RgbaImage::from_raw(width, height, raw)
        .ok_or_else(|| {
            PixelflowError::Other("pixel data does not fit image dimensions".to_string())
        })
}

/// Decode an image file of any supported format into a pixel buffer.
pub fn load(path: impl AsRef<Path>) -> PixelflowResult<PixelBuffer> {
    let path = path.as_ref();
    let image = image::open(path)?.to_rgba8();
    debug!("Loaded {} ({}x{})", path.display(), image.width(), image.height());
    from_rgba_image(&image)
}

/// Encode a pixel buffer to a file; the format follows the extension.
pub fn save(buffer: &PixelBuffer, path: impl AsRef<Path>) -> PixelflowResult<()> {
    let path = path.as_ref();
    let image = DynamicImage::ImageRgba8(to_rgba_image(buffer)?);
    image.save(path)?;
    debug!("Saved {} ({}x{})", path.display(), buffer.width(), buffer.height());
    Ok(())
}
