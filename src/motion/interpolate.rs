use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MappingError {
    #[error("a mapping needs at least two breakpoints, got {0}")]
    TooFewBreakpoints(usize),
    #[error("breakpoint {index} is not a finite number")]
    NonFinite { index: usize },
    #[error("breakpoint {index} input {input} does not increase past {previous}")]
    NotIncreasing { index: usize, input: f64, previous: f64 },
}

/// Piecewise-linear mapping over (input, output) breakpoints.
///
/// Inputs below the first breakpoint or above the last are clamped to the
/// nearest output.
#[derive(Debug, Clone, PartialEq)]
pub struct Mapping {
    breakpoints: Vec<(f64, f64)>,
}

impl Mapping {
    pub fn new(breakpoints: impl Into<Vec<(f64, f64)>>) -> Result<Self, MappingError> {
        let breakpoints = breakpoints.into();
        if breakpoints.len() < 2 {
            return Err(MappingError::TooFewBreakpoints(breakpoints.len()));
        }
        for (index, &(input, output)) in breakpoints.iter().enumerate() {
            if !input.is_finite() || !output.is_finite() {
                return Err(MappingError::NonFinite { index });
            }
        }
        for (index, pair) in breakpoints.windows(2).enumerate() {
            let (previous, input) = (pair[0].0, pair[1].0);
            if input <= previous {
                return Err(MappingError::NotIncreasing { index: index + 1, input, previous });
            }
        }
        Ok(Self { breakpoints })
    }

    pub fn sample(&self, input: f64) -> f64 {
        let first = self.breakpoints[0];
        let last = self.breakpoints[self.breakpoints.len() - 1];
        if input.is_nan() || input <= first.0 {
            return first.1;
        }
        if input >= last.0 {
            return last.1;
        }

        // first breakpoint whose input is past ours; always in 1..len here
        let upper = self.breakpoints.partition_point(|&(x, _)| x <= input);
        let (x0, y0) = self.breakpoints[upper - 1];
        let (x1, y1) = self.breakpoints[upper];
        lerp(y0, y1, (input - x0) / (x1 - x0))
    }
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn two_point_mapping_is_linear() {
        let m = Mapping::new([(0.0, 0.0), (1.0, 40.0)]).unwrap();
        assert!(close(m.sample(0.25), 10.0));
        assert!(close(m.sample(0.5), 20.0));
        assert!(close(m.sample(0.8), 32.0));
    }

    #[test]
    fn clamps_outside_the_breakpoints() {
        let m = Mapping::new([(0.0, 1.0), (0.8, 0.0)]).unwrap();
        assert_eq!(m.sample(-3.0), 1.0);
        assert_eq!(m.sample(0.9), 0.0);
        assert_eq!(m.sample(f64::INFINITY), 0.0);
        assert_eq!(m.sample(f64::NAN), 1.0);
    }

    #[test]
    fn picks_the_bracketing_segment() {
        let m = Mapping::new([(0.0, 0.0), (0.5, 10.0), (1.0, 0.0)]).unwrap();
        assert!(close(m.sample(0.25), 5.0));
        assert!(close(m.sample(0.5), 10.0));
        assert!(close(m.sample(0.75), 5.0));
    }

    #[test]
    fn rejects_bad_breakpoints() {
        assert_eq!(
            Mapping::new([(0.0, 1.0)]),
            Err(MappingError::TooFewBreakpoints(1))
        );
        assert_eq!(
            Mapping::new([(0.0, 1.0), (f64::NAN, 0.0)]),
            Err(MappingError::NonFinite { index: 1 })
        );
        assert!(matches!(
            Mapping::new([(0.0, 1.0), (0.5, 0.0), (0.5, 2.0)]),
            Err(MappingError::NotIncreasing { index: 2, .. })
        ));
    }
}
