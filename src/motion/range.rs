/// Where a tracked element sits, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub element_top: f64,
    pub element_height: f64,
    pub viewport_height: f64,
}

/// An edge of the element lined up with an edge of the viewport.
/// Both are fractions of their own height: 0 is the top, 1 the bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundary {
    pub element: f64,
    pub viewport: f64,
}

impl Boundary {
    pub const fn new(element: f64, viewport: f64) -> Self {
        Self { element, viewport }
    }

    /// Scroll position at which the two edges meet.
    fn scroll_position(&self, geometry: &Geometry) -> f64 {
        geometry.element_top + self.element * geometry.element_height
            - self.viewport * geometry.viewport_height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRange {
    pub start: Boundary,
    pub end: Boundary,
}

impl ScrollRange {
    pub const fn new(start: Boundary, end: Boundary) -> Self {
        Self { start, end }
    }

    /// From the element's top at the viewport top until its bottom gets there.
    pub const fn start_start_to_end_start() -> Self {
        Self::new(Boundary::new(0.0, 0.0), Boundary::new(1.0, 0.0))
    }

    pub fn progress(&self, scroll_y: f64, geometry: &Geometry) -> f64 {
        let start = self.start.scroll_position(geometry);
        let end = self.end.scroll_position(geometry);
        let span = end - start;
        if span == 0.0 || !span.is_finite() {
            return 0.0;
        }
        let progress = (scroll_y - start) / span;
        if progress.is_nan() {
            return 0.0;
        }
        progress.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HERO: Geometry = Geometry {
        element_top: 0.0,
        element_height: 800.0,
        viewport_height: 800.0,
    };

    #[test]
    fn progress_runs_from_start_to_end() {
        let range = ScrollRange::start_start_to_end_start();
        assert_eq!(range.progress(0.0, &HERO), 0.0);
        assert_eq!(range.progress(200.0, &HERO), 0.25);
        assert_eq!(range.progress(800.0, &HERO), 1.0);
    }

    #[test]
    fn progress_is_clamped() {
        let range = ScrollRange::start_start_to_end_start();
        let below = Geometry { element_top: 300.0, ..HERO };
        assert_eq!(range.progress(0.0, &below), 0.0);
        assert_eq!(range.progress(5000.0, &below), 1.0);
    }

    #[test]
    fn zero_height_element_stays_at_zero() {
        let range = ScrollRange::start_start_to_end_start();
        let flat = Geometry { element_height: 0.0, ..HERO };
        assert_eq!(range.progress(0.0, &flat), 0.0);
        assert_eq!(range.progress(400.0, &flat), 0.0);
    }

    #[test]
    fn nan_scroll_position_stays_at_zero() {
        let range = ScrollRange::start_start_to_end_start();
        assert_eq!(range.progress(f64::NAN, &HERO), 0.0);
    }

    #[test]
    fn supports_other_edge_pairs() {
        // top meets viewport bottom through bottom meets viewport top
        let range = ScrollRange::new(Boundary::new(0.0, 1.0), Boundary::new(1.0, 0.0));
        let card = Geometry {
            element_top: 1000.0,
            element_height: 200.0,
            viewport_height: 600.0,
        };
        assert_eq!(range.progress(400.0, &card), 0.0);
        assert_eq!(range.progress(800.0, &card), 0.5);
        assert_eq!(range.progress(1200.0, &card), 1.0);
    }
}
