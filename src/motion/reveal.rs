/// Latch for entrance animations that play once, the first time an element
/// scrolls into view.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RevealGate {
    revealed: bool,
}

impl RevealGate {
    /// Feeds one visibility observation. True only for the observation that
    /// flips the gate; everything after that is ignored.
    pub fn observe(&mut self, visible: bool) -> bool {
        if self.revealed || !visible {
            return false;
        }
        self.revealed = true;
        true
    }
}

/// Pose an element starts from before it is revealed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealFrom {
    /// Rise into place from this many pixels below.
    Below(f64),
    /// Slide in from this many pixels to the left.
    Left(f64),
    /// Grow from this scale factor.
    Scale(f64),
}

impl RevealFrom {
    fn hidden_transform(&self) -> String {
        match self {
            RevealFrom::Below(px) => format!("translate3d(0, {}px, 0)", px),
            RevealFrom::Left(px) => format!("translate3d(-{}px, 0, 0)", px),
            RevealFrom::Scale(factor) => format!("scale({})", factor),
        }
    }

    /// Inline style for the wrapper in either state.
    pub fn style(&self, revealed: bool, delay_ms: u32) -> String {
        if revealed {
            format!(
                "opacity: 1; transform: none; transition: opacity 0.6s ease-out {d}ms, transform 0.6s ease-out {d}ms;",
                d = delay_ms
            )
        } else {
            format!("opacity: 0; transform: {};", self.hidden_transform())
        }
    }
}

impl Default for RevealFrom {
    fn default() -> Self {
        RevealFrom::Below(20.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_opens_on_first_visible_observation() {
        let mut gate = RevealGate::default();
        assert!(!gate.observe(false));
        assert!(!gate.observe(false));
        assert!(gate.observe(true));
    }

    #[test]
    fn gate_stays_open() {
        let mut gate = RevealGate::default();
        assert!(gate.observe(true));
        assert!(!gate.observe(false));
        assert!(!gate.observe(true));
    }

    #[test]
    fn hidden_poses() {
        assert_eq!(
            RevealFrom::Below(50.0).style(false, 0),
            "opacity: 0; transform: translate3d(0, 50px, 0);"
        );
        assert_eq!(
            RevealFrom::Left(50.0).style(false, 0),
            "opacity: 0; transform: translate3d(-50px, 0, 0);"
        );
        assert_eq!(RevealFrom::Scale(0.9).style(false, 0), "opacity: 0; transform: scale(0.9);");
    }

    #[test]
    fn revealed_style_carries_the_delay() {
        let style = RevealFrom::Below(50.0).style(true, 200);
        assert!(style.starts_with("opacity: 1; transform: none;"));
        assert!(style.contains("opacity 0.6s ease-out 200ms"));
        assert!(style.contains("transform 0.6s ease-out 200ms"));
    }
}
