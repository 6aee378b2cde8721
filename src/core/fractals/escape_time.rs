use crate::core::data::complex::Complex;
use crate::core::data::escape_time::{EscapeTime, IterationCount};
use std::error::Error;
use std::fmt;
use std::ops::ControlFlow;

const ESCAPE_RADIUS: f64 = 2.0;
const ESCAPE_RADIUS_SQUARED: f64 = ESCAPE_RADIUS * ESCAPE_RADIUS;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EscapeTimeError {
    ZeroMaxIterationsError,
}

impl fmt::Display for EscapeTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterationsError => {
                write!(f, "Maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for EscapeTimeError {}

/// Iterates `z <- z² + c` from a starting state until `|z| > 2` or the
/// iteration budget runs out.
///
/// Mandelbrot and Julia sets share this loop and differ only in which value is
/// the fixed parameter `c` and which is the starting state `z0`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EscapeTimeEngine {
    max_iterations: u32,
}

impl EscapeTimeEngine {
    pub fn new(max_iterations: u32) -> Result<Self, EscapeTimeError> {
        if max_iterations == 0 {
            return Err(EscapeTimeError::ZeroMaxIterationsError);
        }

        Ok(Self { max_iterations })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Returns the step count and the state that first left the escape
    /// radius, or `None` when the budget was exhausted.
    fn orbit(&self, c: Complex, z0: Complex) -> Option<(u32, Complex)> {
        let escape = (0..self.max_iterations).try_fold(z0, |z, iteration| {
            if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
                ControlFlow::Break((iteration, z))
            } else {
                ControlFlow::Continue(z * z + c)
            }
        });

        match escape {
            ControlFlow::Break(escaped) => Some(escaped),
            ControlFlow::Continue(_) => None,
        }
    }

    #[must_use]
    pub fn discrete(&self, c: Complex, z0: Complex) -> EscapeTime<u32> {
        match self.orbit(c, z0) {
            Some((iterations, _)) => EscapeTime::escaped(iterations),
            None => EscapeTime::bounded(self.max_iterations),
        }
    }

    /// Fractional escape count `n + 1 - ln(log2 |z|)`, clamped to
    /// `[0, max_iterations]`. Bounded points get exactly `max_iterations`.
    #[must_use]
    pub fn smoothed(&self, c: Complex, z0: Complex) -> EscapeTime<f64> {
        let Some((iterations, z)) = self.orbit(c, z0) else {
            return EscapeTime::bounded(self.max_iterations);
        };

        let iterations = f64::from(iterations);
        let modulus = z.magnitude();

        // The loop only exits with |z| > 2, so log2 |z| > 1 and the outer
        // log stays positive. Anything else falls back to the discrete count.
        if modulus <= ESCAPE_RADIUS || modulus.is_nan() {
            return EscapeTime::escaped(iterations);
        }

        let smoothed = iterations + 1.0 - modulus.log2().ln();

        EscapeTime::escaped(smoothed.clamp(0.0, f64::from(self.max_iterations)))
    }
}

/// Selects at the type level whether a render produces discrete or smoothed
/// iteration counts.
pub trait EscapeMode: fmt::Debug + Send + Sync {
    type Count: IterationCount;

    fn escape(engine: &EscapeTimeEngine, c: Complex, z0: Complex) -> EscapeTime<Self::Count>;
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Discrete;

impl EscapeMode for Discrete {
    type Count = u32;

    #[inline]
    fn escape(engine: &EscapeTimeEngine, c: Complex, z0: Complex) -> EscapeTime<u32> {
        engine.discrete(c, z0)
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Smoothed;

impl EscapeMode for Smoothed {
    type Count = f64;

    #[inline]
    fn escape(engine: &EscapeTimeEngine, c: Complex, z0: Complex) -> EscapeTime<f64> {
        engine.smoothed(c, z0)
    }
}
