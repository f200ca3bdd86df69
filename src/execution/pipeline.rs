//! Ordered filter composition.

use crate::core::pixel::Pixel;
use crate::filters::filter::{FilterRef, PixelFilter};
use std::sync::Arc;

/// An ordered sequence of filters applied one after another.
///
/// Each stage sees the output of the previous one, and a stage whose
/// [`matches`](PixelFilter::matches) is false passes the pixel through
/// untouched. A pipeline is itself a [`PixelFilter`], so it can be
/// registered by name or nested inside another pipeline.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    stages: Vec<FilterRef>,
}

impl Pipeline {
    /// Create a pipeline from filters in application order.
    pub fn new(stages: Vec<FilterRef>) -> Self {
        Self { stages }
    }

    /// The identity pipeline.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Append a stage.
    pub fn push(&mut self, filter: FilterRef) {
        self.stages.push(filter);
    }

    /// Builder-style [`push`](Self::push).
    pub fn then(mut self, filter: FilterRef) -> Self {
        self.push(filter);
        self
    }

    /// Builder-style append of a concrete filter value.
    pub fn then_filter<F>(self, filter: F) -> Self
    where
        F: PixelFilter + 'static,
    {
        self.then(Arc::new(filter))
    }

    /// Stages in application order.
    pub fn stages(&self) -> &[FilterRef] {
        &self.stages
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// True for the identity pipeline.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl PixelFilter for Pipeline {
    fn name(&self) -> &str {
        "pipeline"
    }

    fn apply(&self, pixel: Pixel) -> Pixel {
        self.stages
            .iter()
            .fold(pixel, |pixel, stage| stage.apply_if_matching(pixel))
    }
}

impl FromIterator<FilterRef> for Pipeline {
    fn from_iter<I: IntoIterator<Item = FilterRef>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Extend<FilterRef> for Pipeline {
    fn extend<I: IntoIterator<Item = FilterRef>>(&mut self, iter: I) {
        self.stages.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::builtin::{
        Balance, BlackAndWhite, EnhancedRed, HalfBrighter, HalfBrightness, LumaRange,
    };
    use proptest::prelude::*;

    fn any_pixel() -> impl Strategy<Value = Pixel> {
        any::<[u8; 4]>().prop_map(Pixel::from)
    }

    fn any_filter() -> impl Strategy<Value = FilterRef> {
        prop_oneof![
            (-300i32..300).prop_map(|s| Arc::new(EnhancedRed::new(s)) as FilterRef),
            Just(Arc::new(BlackAndWhite) as FilterRef),
            Just(Arc::new(HalfBrightness) as FilterRef),
            Just(Arc::new(HalfBrighter) as FilterRef),
            Just(Arc::new(Balance) as FilterRef),
        ]
    }

    #[test]
    fn test_empty_is_identity() {
        let pipeline = Pipeline::empty();
        assert!(pipeline.is_empty());
        let pixel = Pixel::new(1, 2, 3, 4);
        assert_eq!(pipeline.apply(pixel), pixel);
    }

    #[test]
    fn test_order_matters() {
        let pixel = Pixel::rgb(100, 0, 0);
        let red_then_bw = Pipeline::empty()
            .then_filter(EnhancedRed::new(50))
            .then_filter(BlackAndWhite);
        let bw_then_red = Pipeline::empty()
            .then_filter(BlackAndWhite)
            .then_filter(EnhancedRed::new(50));

        assert_eq!(red_then_bw.apply(pixel), Pixel::rgb(50, 50, 50));
        assert_eq!(bw_then_red.apply(pixel), Pixel::rgb(83, 33, 33));
    }

    #[test]
    fn test_repeated_stage_with_different_parameters() {
        let pipeline: Pipeline = [10, 20, -5]
            .into_iter()
            .map(|s| Arc::new(EnhancedRed::new(s)) as FilterRef)
            .collect();
        assert_eq!(pipeline.len(), 3);
        assert_eq!(pipeline.apply(Pixel::rgb(0, 0, 0)).red, 25);
    }

    #[test]
    fn test_saturation_is_per_stage() {
        // The first stage saturates at 255, so the second brings it down from 255.
        let pipeline = Pipeline::empty()
            .then_filter(EnhancedRed::new(100))
            .then_filter(EnhancedRed::new(-100));
        assert_eq!(pipeline.apply(Pixel::rgb(200, 0, 0)).red, 155);
    }

    #[test]
    fn test_non_matching_stage_is_skipped() {
        // BW turns (250, 10, 10) into luma 90, so the bright-only stage is skipped.
        let pipeline = Pipeline::empty()
            .then_filter(BlackAndWhite)
            .then_filter(LumaRange::above(128, Arc::new(HalfBrightness)))
            .then_filter(EnhancedRed::new(5));
        assert_eq!(pipeline.apply(Pixel::rgb(250, 10, 10)), Pixel::rgb(95, 90, 90));
    }

    #[test]
    fn test_predicate_sees_previous_output() {
        // Original luma is 30, but after brightening it is 45 and matches.
        let pipeline = Pipeline::empty()
            .then_filter(HalfBrighter)
            .then_filter(LumaRange::above(40, Arc::new(HalfBrightness)));
        assert_eq!(pipeline.apply(Pixel::rgb(30, 30, 30)), Pixel::rgb(22, 22, 22));
    }

    #[test]
    fn test_nested_pipeline() {
        let inner = Pipeline::empty()
            .then_filter(EnhancedRed::new(10))
            .then_filter(EnhancedRed::new(10));
        let outer = Pipeline::empty().then_filter(inner).then_filter(EnhancedRed::new(1));
        assert_eq!(outer.apply(Pixel::rgb(0, 0, 0)).red, 21);
    }

    proptest! {
        #[test]
        fn prop_empty_identity(p in any_pixel()) {
            prop_assert_eq!(Pipeline::empty().apply(p), p);
        }

        #[test]
        fn prop_two_stage_composition(p in any_pixel(), f1 in any_filter(), f2 in any_filter()) {
            let pipeline = Pipeline::new(vec![f1.clone(), f2.clone()]);
            prop_assert_eq!(pipeline.apply(p), f2.apply(f1.apply(p)));
        }

        #[test]
        fn prop_composition_is_associative(
            p in any_pixel(),
            stages in proptest::collection::vec(any_filter(), 0..6),
            split in 0usize..6,
        ) {
            let split = split.min(stages.len());
            let flat = Pipeline::new(stages.clone());
            let nested = Pipeline::empty()
                .then_filter(Pipeline::new(stages[..split].to_vec()))
                .then_filter(Pipeline::new(stages[split..].to_vec()));
            prop_assert_eq!(flat.apply(p), nested.apply(p));
        }
    }
}
