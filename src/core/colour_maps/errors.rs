use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColourMapError {
    IterationsExceedMax {
        iterations: f64,
        max_iterations: u32,
    },
    NotANumber,
}

impl fmt::Display for ColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationsExceedMax {
                iterations,
                max_iterations,
            } => {
                write!(
                    f,
                    "iterations {} exceeds maximum {}",
                    iterations, max_iterations
                )
            }
            Self::NotANumber => write!(f, "iteration value is not a number"),
        }
    }
}

impl Error for ColourMapError {}

/// Rejects values a colour map cannot place on its scale and floors
/// negatives to zero.
pub(crate) fn checked_iterations(
    iterations: f64,
    max_iterations: u32,
) -> Result<f64, ColourMapError> {
    if iterations.is_nan() {
        return Err(ColourMapError::NotANumber);
    }

    if iterations > f64::from(max_iterations) {
        return Err(ColourMapError::IterationsExceedMax {
            iterations,
            max_iterations,
        });
    }

    Ok(iterations.max(0.0))
}
