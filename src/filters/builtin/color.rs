//! Color adjustment filters.

use crate::core::pixel::{clamp, clamp_rounded, Pixel};
use crate::filters::filter::PixelFilter;
use crate::filters::registry::FilterRegistry;
use std::sync::Arc;

/// Shift applied by the seeded "More Red" filter.
pub const DEFAULT_RED_SHIFT: i32 = 10;

/// Register the default color filter configurations.
pub fn register(registry: &mut FilterRegistry) {
    registry.register("BW", Arc::new(BlackAndWhite));
    registry.register("More Red", Arc::new(EnhancedRed::new(DEFAULT_RED_SHIFT)));
    registry.register("50% Brightness", Arc::new(HalfBrightness));
    registry.register("50% Brighter", Arc::new(HalfBrighter));
    registry.register("Balance", Arc::new(Balance));
}

/// Adds a fixed amount to the red channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnhancedRed {
    shift: i32,
}

impl EnhancedRed {
    /// Create a red shift; negative values reduce red.
    pub fn new(shift: i32) -> Self {
        Self { shift }
    }

    /// The configured shift.
    pub fn shift(&self) -> i32 {
        self.shift
    }
}

impl PixelFilter for EnhancedRed {
    fn name(&self) -> &str {
        "enhanced_red"
    }

    fn apply(&self, pixel: Pixel) -> Pixel {
        Pixel {
            red: clamp(i64::from(pixel.red) + i64::from(self.shift)),
            ..pixel
        }
    }
}

/// Replaces the color channels with their rounded mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlackAndWhite;

impl PixelFilter for BlackAndWhite {
    fn name(&self) -> &str {
        "black_and_white"
    }

    fn apply(&self, pixel: Pixel) -> Pixel {
        let gray = pixel.luma();
        Pixel::new(gray, gray, gray, pixel.alpha)
    }
}

/// Halves each color channel with truncating division.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfBrightness;

impl PixelFilter for HalfBrightness {
    fn name(&self) -> &str {
        "half_brightness"
    }

    fn apply(&self, pixel: Pixel) -> Pixel {
        pixel.map_rgb(|c| c / 2)
    }
}

/// Scales each color channel by 1.5, rounding to nearest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HalfBrighter;

impl HalfBrighter {
    const FACTOR: f64 = 1.5;
}

impl PixelFilter for HalfBrighter {
    fn name(&self) -> &str {
        "half_brighter"
    }

    fn apply(&self, pixel: Pixel) -> Pixel {
        pixel.map_rgb(|c| clamp_rounded(f64::from(c) * Self::FACTOR))
    }
}

/// Pushes each color channel half its distance further from the pixel mean.
///
/// With `delta = channel - mean`, the output is `channel + delta * 0.5`,
/// rounded and clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Balance;

impl Balance {
    const BLEND: f64 = 0.5;
}

impl PixelFilter for Balance {
    fn name(&self) -> &str {
        "balance"
    }

    fn apply(&self, pixel: Pixel) -> Pixel {
        let average = pixel.mean();
        pixel.map_rgb(|c| {
            let channel = f64::from(c);
            clamp_rounded(channel + (channel - average) * Self::BLEND)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SAMPLE: Pixel = Pixel::new(128, 64, 32, 255);

    fn any_pixel() -> impl Strategy<Value = Pixel> {
        any::<[u8; 4]>().prop_map(Pixel::from)
    }

    #[test]
    fn test_enhanced_red_sample() {
        assert_eq!(EnhancedRed::new(10).apply(SAMPLE), Pixel::new(138, 64, 32, 255));
    }

    #[test]
    fn test_enhanced_red_saturates() {
        assert_eq!(EnhancedRed::new(100).apply(Pixel::rgb(200, 1, 2)).red, 255);
        assert_eq!(EnhancedRed::new(-100).apply(Pixel::rgb(50, 1, 2)).red, 0);
        assert_eq!(EnhancedRed::new(i32::MAX).apply(Pixel::rgb(255, 0, 0)).red, 255);
        assert_eq!(EnhancedRed::new(i32::MIN).apply(Pixel::rgb(255, 0, 0)).red, 0);
    }

    #[test]
    fn test_black_and_white_sample() {
        assert_eq!(BlackAndWhite.apply(SAMPLE), Pixel::new(75, 75, 75, 255));
    }

    #[test]
    fn test_half_brightness_truncates() {
        let out = HalfBrightness.apply(Pixel::new(5, 255, 1, 77));
        assert_eq!(out, Pixel::new(2, 127, 0, 77));
    }

    #[test]
    fn test_half_brighter_rounds_and_clamps() {
        assert_eq!(HalfBrighter.apply(Pixel::rgb(200, 0, 0)).red, 255);
        // 5 * 1.5 = 7.5 rounds up; 3 * 1.5 = 4.5 rounds up.
        assert_eq!(HalfBrighter.apply(Pixel::rgb(5, 3, 100)), Pixel::rgb(8, 5, 150));
    }

    #[test]
    fn test_balance_sample() {
        // mean = 74.667; red 128 + 26.667 = 154.67, green 64 - 5.333 = 58.67,
        // blue 32 - 21.333 = 10.67
        assert_eq!(Balance.apply(SAMPLE), Pixel::new(155, 59, 11, 255));
    }

    #[test]
    fn test_balance_gray_is_fixed_point() {
        let gray = Pixel::new(90, 90, 90, 3);
        assert_eq!(Balance.apply(gray), gray);
    }

    #[test]
    fn test_balance_clamps() {
        assert_eq!(Balance.apply(Pixel::rgb(255, 0, 0)), Pixel::rgb(255, 0, 0));
    }

    #[test]
    fn test_defaults_match_unconditionally() {
        let filters: [&dyn PixelFilter; 5] = [
            &EnhancedRed::new(DEFAULT_RED_SHIFT),
            &BlackAndWhite,
            &HalfBrightness,
            &HalfBrighter,
            &Balance,
        ];
        for filter in filters {
            assert!(filter.matches(Pixel::default()), "{}", filter.name());
            assert!(filter.matches(Pixel::new(255, 255, 255, 255)), "{}", filter.name());
        }
    }

    proptest! {
        #[test]
        fn prop_enhanced_red(p in any_pixel(), shift in -600i32..600) {
            let out = EnhancedRed::new(shift).apply(p);
            prop_assert_eq!(out.red, clamp(i64::from(p.red) + i64::from(shift)));
            prop_assert_eq!((out.green, out.blue, out.alpha), (p.green, p.blue, p.alpha));
        }

        #[test]
        fn prop_black_and_white_equal_channels(p in any_pixel()) {
            let out = BlackAndWhite.apply(p);
            let expected = clamp_rounded(p.mean());
            prop_assert_eq!(out, Pixel::new(expected, expected, expected, p.alpha));
        }

        #[test]
        fn prop_black_and_white_idempotent(p in any_pixel()) {
            let once = BlackAndWhite.apply(p);
            prop_assert_eq!(BlackAndWhite.apply(once), once);
        }

        #[test]
        fn prop_half_brightness(p in any_pixel()) {
            let out = HalfBrightness.apply(p);
            prop_assert_eq!(out.red, p.red / 2);
            prop_assert_eq!(out.green, p.green / 2);
            prop_assert_eq!(out.blue, p.blue / 2);
            prop_assert_eq!(out.alpha, p.alpha);
        }

        #[test]
        fn prop_half_brighter(p in any_pixel()) {
            let out = HalfBrighter.apply(p);
            prop_assert_eq!(out.red, clamp_rounded(f64::from(p.red) * 1.5));
            prop_assert_eq!(out.alpha, p.alpha);
        }

        #[test]
        fn prop_balance(p in any_pixel()) {
            let mean = p.mean();
            let expected = |c: u8| {
                let c = f64::from(c);
                clamp_rounded(c + (c - mean) * 0.5)
            };
            let out = Balance.apply(p);
            prop_assert_eq!(out.red, expected(p.red));
            prop_assert_eq!(out.green, expected(p.green));
            prop_assert_eq!(out.blue, expected(p.blue));
            prop_assert_eq!(out.alpha, p.alpha);
        }
    }
}
