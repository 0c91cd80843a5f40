use crate::config;
use crate::motion::interpolate::{Mapping, MappingError};
use crate::motion::range::{Geometry, ScrollRange};

/// Whatever can tell the engine how far the page is scrolled and where the
/// tracked element currently is.
pub trait ScrollSource {
    fn scroll_y(&self) -> f64;

    /// `None` once the element is gone from the page.
    fn geometry(&self) -> Option<Geometry>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub progress: f64,
    /// Vertical translation, in percent of the element's own height.
    pub offset_percent: f64,
    pub opacity: f64,
}

impl Frame {
    pub const REST: Frame = Frame {
        progress: 0.0,
        offset_percent: 0.0,
        opacity: 1.0,
    };

    /// Inline style for the tracked element. Only compositor properties are
    /// touched so a scroll never forces layout.
    pub fn style(&self) -> String {
        format!(
            "transform: translate3d(0, {:.3}%, 0); opacity: {:.3}; will-change: transform, opacity;",
            self.offset_percent, self.opacity
        )
    }
}

pub struct TransformEngine<S> {
    source: S,
    range: ScrollRange,
    offset: Mapping,
    opacity: Mapping,
}

impl<S: ScrollSource> TransformEngine<S> {
    pub fn new(source: S, range: ScrollRange, offset: Mapping, opacity: Mapping) -> Self {
        Self { source, range, offset, opacity }
    }

    /// Parallax and fade used on the hero background.
    pub fn hero(source: S) -> Result<Self, MappingError> {
        Ok(Self::new(
            source,
            config::HERO_SCROLL_RANGE,
            Mapping::new(config::HERO_OFFSET_BREAKPOINTS)?,
            Mapping::new(config::HERO_OPACITY_BREAKPOINTS)?,
        ))
    }

    pub fn frame_at(&self, scroll_y: f64, geometry: &Geometry) -> Frame {
        let progress = self.range.progress(scroll_y, geometry);
        Frame {
            progress,
            offset_percent: self.offset.sample(progress),
            opacity: self.opacity.sample(progress),
        }
    }

    /// Geometry is read fresh on every call, so resizes are picked up on the
    /// next scroll event.
    pub fn sample(&self) -> Option<Frame> {
        let geometry = self.source.geometry()?;
        Some(self.frame_at(self.source.scroll_y(), &geometry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FakeScroll {
        y: Cell<f64>,
        height: Cell<f64>,
        mounted: Cell<bool>,
    }

    impl FakeScroll {
        fn new(height: f64) -> Self {
            Self {
                y: Cell::new(0.0),
                height: Cell::new(height),
                mounted: Cell::new(true),
            }
        }
    }

    impl ScrollSource for &FakeScroll {
        fn scroll_y(&self) -> f64 {
            self.y.get()
        }

        fn geometry(&self) -> Option<Geometry> {
            self.mounted.get().then(|| Geometry {
                element_top: 0.0,
                element_height: self.height.get(),
                viewport_height: 900.0,
            })
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn frame_for(progress: f64) -> Frame {
        let source = FakeScroll::new(1000.0);
        let engine = TransformEngine::hero(&source).unwrap();
        source.y.set(progress * 1000.0);
        engine.sample().unwrap()
    }

    #[test]
    fn offset_follows_progress_up_to_forty_percent() {
        for step in 0..=20 {
            let p = step as f64 / 20.0;
            assert!(close(frame_for(p).offset_percent, p * 40.0), "p = {p}");
        }
    }

    #[test]
    fn opacity_fades_out_by_eighty_percent() {
        let mut previous = f64::INFINITY;
        for step in 0..=16 {
            let p = step as f64 / 20.0;
            let opacity = frame_for(p).opacity;
            assert!(close(opacity, 1.0 - p / 0.8), "p = {p}");
            assert!(opacity < previous);
            previous = opacity;
        }
        for p in [0.85, 0.9, 1.0] {
            assert_eq!(frame_for(p).opacity, 0.0);
        }
    }

    #[test]
    fn out_of_range_scroll_clamps() {
        assert_eq!(frame_for(-0.5), frame_for(0.0));
        assert_eq!(frame_for(1.5), frame_for(1.0));
        assert_eq!(frame_for(-0.5).offset_percent, 0.0);
        assert!(close(frame_for(1.5).offset_percent, 40.0));
    }

    #[test]
    fn scroll_scenario() {
        assert_eq!(frame_for(0.0), Frame::REST);

        let at_80 = frame_for(0.8);
        assert!(close(at_80.offset_percent, 32.0));
        assert!(close(at_80.opacity, 0.0));

        let at_end = frame_for(1.0);
        assert!(close(at_end.offset_percent, 40.0));
        assert_eq!(at_end.opacity, 0.0);
    }

    #[test]
    fn sweep_across_and_beyond_the_range() {
        let source = FakeScroll::new(937.0);
        let engine = TransformEngine::hero(&source).unwrap();
        let mut previous_opacity = f64::INFINITY;
        for step in 0..=2000 {
            let p = -0.5 + step as f64 / 1000.0;
            source.y.set(p * 937.0);
            let frame = engine.sample().unwrap();
            let clamped = p.clamp(0.0, 1.0);
            assert!((frame.offset_percent - clamped * 40.0).abs() < 1e-6, "p = {p}");
            let expected = if clamped <= 0.8 { 1.0 - clamped / 0.8 } else { 0.0 };
            assert!((frame.opacity - expected).abs() < 1e-6, "p = {p}");
            assert!((0.0..=40.0).contains(&frame.offset_percent));
            assert!((0.0..=1.0).contains(&frame.opacity));
            assert!(frame.opacity <= previous_opacity);
            previous_opacity = frame.opacity;
        }
    }

    #[test]
    fn zero_height_hero_rests() {
        let source = FakeScroll::new(0.0);
        let engine = TransformEngine::hero(&source).unwrap();
        source.y.set(250.0);
        assert_eq!(engine.sample(), Some(Frame::REST));
    }

    #[test]
    fn geometry_is_reread_on_every_sample() {
        let source = FakeScroll::new(1000.0);
        let engine = TransformEngine::hero(&source).unwrap();
        source.y.set(400.0);
        assert!(close(engine.sample().unwrap().progress, 0.4));

        source.height.set(500.0);
        assert!(close(engine.sample().unwrap().progress, 0.8));
    }

    #[test]
    fn unmounted_element_yields_nothing() {
        let source = FakeScroll::new(1000.0);
        let engine = TransformEngine::hero(&source).unwrap();
        source.mounted.set(false);
        assert_eq!(engine.sample(), None);
    }

    #[test]
    fn same_input_same_frame() {
        let source = FakeScroll::new(1000.0);
        let engine = TransformEngine::hero(&source).unwrap();
        source.y.set(333.0);
        assert_eq!(engine.sample(), engine.sample());
    }

    #[test]
    fn style_only_touches_transform_and_opacity() {
        let style = Frame {
            progress: 0.5,
            offset_percent: 20.0,
            opacity: 0.375,
        }
        .style();
        assert_eq!(
            style,
            "transform: translate3d(0, 20.000%, 0); opacity: 0.375; will-change: transform, opacity;"
        );
    }
}
