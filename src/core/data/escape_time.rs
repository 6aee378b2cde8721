use std::fmt::Debug;

/// An iteration value produced by the escape-time engine: `u32` for discrete
/// counts and `f64` for smoothed counts.
pub trait IterationCount: Copy + PartialOrd + Debug + Send + Sync {
    fn from_u32(value: u32) -> Self;

    fn to_f64(self) -> f64;
}

impl IterationCount for u32 {
    #[inline]
    fn from_u32(value: u32) -> Self {
        value
    }

    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl IterationCount for f64 {
    #[inline]
    fn from_u32(value: u32) -> Self {
        f64::from(value)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}

/// The result of iterating a single point.
///
/// Bounded points (those that never left the escape radius within the
/// iteration budget) always carry exactly `max_iterations`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeTime<N> {
    iterations: N,
    escaped: bool,
}

impl<N: IterationCount> EscapeTime<N> {
    #[must_use]
    pub fn escaped(iterations: N) -> Self {
        Self {
            iterations,
            escaped: true,
        }
    }

    #[must_use]
    pub fn bounded(max_iterations: u32) -> Self {
        Self {
            iterations: N::from_u32(max_iterations),
            escaped: false,
        }
    }

    #[must_use]
    pub fn iterations(&self) -> N {
        self.iterations
    }

    #[must_use]
    pub fn has_escaped(&self) -> bool {
        self.escaped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_carries_max_iterations() {
        let discrete: EscapeTime<u32> = EscapeTime::bounded(80);
        let smoothed: EscapeTime<f64> = EscapeTime::bounded(80);

        assert_eq!(discrete.iterations(), 80);
        assert_eq!(smoothed.iterations(), 80.0);
        assert!(!discrete.has_escaped());
        assert!(!smoothed.has_escaped());
    }

    #[test]
    fn escaped_keeps_value() {
        let escape = EscapeTime::escaped(3.25);

        assert_eq!(escape.iterations(), 3.25);
        assert!(escape.has_escaped());
    }
}
