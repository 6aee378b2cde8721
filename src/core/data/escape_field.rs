use crate::core::data::escape_time::{EscapeTime, IterationCount};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EscapeFieldError {
    BoundsMismatch {
        pixel_rect_size: usize,
        field_size: usize,
    },
    ZeroMaxIterations,
}

impl fmt::Display for EscapeFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                pixel_rect_size,
                field_size,
            } => {
                write!(
                    f,
                    "pixel rect size {} does not match escape field size {}",
                    pixel_rect_size, field_size
                )
            }
            Self::ZeroMaxIterations => write!(f, "max iterations must be greater than zero"),
        }
    }
}

impl Error for EscapeFieldError {}

/// One escape result per pixel, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct EscapeField<N> {
    pixel_rect: PixelRect,
    max_iterations: u32,
    values: Vec<EscapeTime<N>>,
}

impl<N: IterationCount> EscapeField<N> {
    pub fn from_values(
        pixel_rect: PixelRect,
        max_iterations: u32,
        values: Vec<EscapeTime<N>>,
    ) -> Result<Self, EscapeFieldError> {
        if max_iterations == 0 {
            return Err(EscapeFieldError::ZeroMaxIterations);
        }

        if values.len() != pixel_rect.size() {
            return Err(EscapeFieldError::BoundsMismatch {
                pixel_rect_size: pixel_rect.size(),
                field_size: values.len(),
            });
        }

        Ok(Self {
            pixel_rect,
            max_iterations,
            values,
        })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn values(&self) -> &[EscapeTime<N>] {
        &self.values
    }

    #[must_use]
    pub fn get(&self, point: Point) -> Option<EscapeTime<N>> {
        self.pixel_rect
            .index_of(point)
            .map(|index| self.values[index])
    }

    #[must_use]
    pub fn escaped_count(&self) -> usize {
        self.values.iter().filter(|value| value.has_escaped()).count()
    }
}
