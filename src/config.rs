use log::Level;

use crate::motion::range::ScrollRange;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Chatty when running locally with trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const HERO_SCROLL_RANGE: ScrollRange = ScrollRange::start_start_to_end_start();

/// Percent of the hero's height it drifts down while scrolled past.
pub const HERO_OFFSET_BREAKPOINTS: [(f64, f64); 2] = [(0.0, 0.0), (1.0, 40.0)];

// Fully faded before the hero has scrolled out.
pub const HERO_OPACITY_BREAKPOINTS: [(f64, f64); 2] = [(0.0, 1.0), (0.8, 0.0)];

/// Fraction of an element that has to be on screen before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.15;
