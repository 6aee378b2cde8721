use std::error::Error;
use std::fmt;

use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::escape_field::{EscapeField, EscapeFieldError};
use crate::core::fractals::algorithm::EscapeTimeAlgorithm;
use crate::core::fractals::escape_time::EscapeMode;
use crate::core::util::pixel_to_complex_coords::PixelToComplexCoordsError;

#[derive(Debug)]
pub enum GenerateEscapeFieldError {
    Algorithm(PixelToComplexCoordsError),
    EscapeField(EscapeFieldError),
}

impl fmt::Display for GenerateEscapeFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Algorithm(err) => write!(f, "algorithm error: {}", err),
            Self::EscapeField(err) => write!(f, "escape field error: {}", err),
        }
    }
}

impl Error for GenerateEscapeFieldError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Algorithm(err) => Some(err),
            Self::EscapeField(err) => Some(err),
        }
    }
}

impl From<PixelToComplexCoordsError> for GenerateEscapeFieldError {
    fn from(err: PixelToComplexCoordsError) -> Self {
        Self::Algorithm(err)
    }
}

impl From<EscapeFieldError> for GenerateEscapeFieldError {
    fn from(err: EscapeFieldError) -> Self {
        Self::EscapeField(err)
    }
}

/// Runs the escape-time pass over every pixel of the algorithm's rect in
/// parallel and packages the results as a complete field.
pub fn generate_escape_field<M: EscapeMode>(
    algorithm: &EscapeTimeAlgorithm<M>,
) -> Result<EscapeField<M::Count>, GenerateEscapeFieldError> {
    let pixel_rect = algorithm.pixel_rect();
    let values = generate_fractal_parallel_rayon(pixel_rect, algorithm)?;

    Ok(EscapeField::from_values(
        pixel_rect,
        algorithm.max_iterations(),
        values,
    )?)
}
