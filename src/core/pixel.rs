//! The pixel value type and channel clamping.
//!
//! Every channel write in the crate goes through [`clamp`] (or
//! [`clamp_rounded`] for real-valued arithmetic), so a [`Pixel`] can never
//! hold a wrapped or out-of-range value.

use std::fmt;

/// Saturate an integer to the `[0, 255]` channel range.
#[inline]
pub fn clamp(value: i64) -> u8 {
    value.clamp(0, 255) as u8
}

/// Round a real value to the nearest integer, then saturate it to a channel.
///
/// Halves round away from zero. NaN maps to 0.
#[inline]
pub fn clamp_rounded(value: f64) -> u8 {
    clamp(value.round() as i64)
}

/// An RGBA pixel with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
    /// Alpha channel.
    pub alpha: u8,
}

impl Pixel {
    /// Create a pixel from all four channels.
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self { red, green, blue, alpha }
    }

    /// Create a fully opaque pixel.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, 255)
    }

    /// Mean of the three color channels as a real number.
    pub fn mean(&self) -> f64 {
        (f64::from(self.red) + f64::from(self.green) + f64::from(self.blue)) / 3.0
    }

    /// Rounded mean of the color channels; the gray level black-and-white
    /// conversion produces.
    pub fn luma(&self) -> u8 {
        clamp_rounded(self.mean())
    }

    /// Return a copy with each color channel mapped through `f`. Alpha is kept.
    pub fn map_rgb<F>(self, f: F) -> Self
    where
        F: Fn(u8) -> u8,
    {
        Self {
            red: f(self.red),
            green: f(self.green),
            blue: f(self.blue),
            alpha: self.alpha,
        }
    }

    /// Channels in `[r, g, b, a]` order.
    pub const fn to_array(self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }
}

impl From<[u8; 4]> for Pixel {
    fn from([red, green, blue, alpha]: [u8; 4]) -> Self {
        Self::new(red, green, blue, alpha)
    }
}

impl From<Pixel> for [u8; 4] {
    fn from(pixel: Pixel) -> Self {
        pixel.to_array()
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.red, self.green, self.blue, self.alpha)
    }
}
