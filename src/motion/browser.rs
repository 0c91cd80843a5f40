use web_sys::{Element, Window};

use crate::motion::engine::ScrollSource;
use crate::motion::range::Geometry;

/// Window scroll position and an element's live bounding box.
pub struct WindowScroll {
    window: Window,
    element: Element,
}

impl WindowScroll {
    pub fn new(window: Window, element: Element) -> Self {
        Self { window, element }
    }
}

impl ScrollSource for WindowScroll {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn geometry(&self) -> Option<Geometry> {
        if !self.element.is_connected() {
            return None;
        }
        let rect = self.element.get_bounding_client_rect();
        let viewport_height = self.window.inner_height().ok()?.as_f64()?;
        Some(Geometry {
            element_top: rect.top() + self.scroll_y(),
            element_height: rect.height(),
            viewport_height,
        })
    }
}
