use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexRectError {
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for ComplexRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "complex rect size must be positive: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for ComplexRectError {}

/// The window of the complex plane sampled by a render.
///
/// `top_left` holds the window's start corner (`RE_START`, `IM_START`) and is
/// sampled by pixel (0, 0); `bottom_right` holds (`RE_END`, `IM_END`).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    top_left: Complex,
    bottom_right: Complex,
}

impl ComplexRect {
    pub fn new(top_left: Complex, bottom_right: Complex) -> Result<Self, ComplexRectError> {
        let width = bottom_right.real - top_left.real;
        let height = bottom_right.imag - top_left.imag;

        // `!(x > 0.0)` also rejects NaN extents
        if !(width > 0.0) || !(height > 0.0) {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    pub fn from_ranges(
        re_start: f64,
        re_end: f64,
        im_start: f64,
        im_end: f64,
    ) -> Result<Self, ComplexRectError> {
        Self::new(Complex::new(re_start, im_start), Complex::new(re_end, im_end))
    }

    #[must_use]
    pub fn top_left(&self) -> Complex {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Complex {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.bottom_right.real - self.top_left.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom_right.imag - self.top_left.imag
    }
}
