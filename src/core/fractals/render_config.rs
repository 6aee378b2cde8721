use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::fractals::escape_time::{EscapeTimeEngine, EscapeTimeError};
use crate::core::fractals::fractal_kinds::FractalKind;
use std::error::Error;
use std::fmt;

pub const DEFAULT_MAX_ITERATIONS: u32 = 80;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    PixelRect(PixelRectError),
    ComplexRect(ComplexRectError),
    EscapeTime(EscapeTimeError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelRect(err) => write!(f, "invalid image size: {}", err),
            Self::ComplexRect(err) => write!(f, "invalid plane window: {}", err),
            Self::EscapeTime(err) => write!(f, "invalid iteration budget: {}", err),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PixelRect(err) => Some(err),
            Self::ComplexRect(err) => Some(err),
            Self::EscapeTime(err) => Some(err),
        }
    }
}

impl From<PixelRectError> for ConfigError {
    fn from(err: PixelRectError) -> Self {
        Self::PixelRect(err)
    }
}

impl From<ComplexRectError> for ConfigError {
    fn from(err: ComplexRectError) -> Self {
        Self::ComplexRect(err)
    }
}

impl From<EscapeTimeError> for ConfigError {
    fn from(err: EscapeTimeError) -> Self {
        Self::EscapeTime(err)
    }
}

/// Everything a single render needs, validated once up front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
    engine: EscapeTimeEngine,
    fractal: FractalKind,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::from_dimensions(
            600,
            400,
            (-2.0, 1.0),
            (-1.0, 1.0),
            DEFAULT_MAX_ITERATIONS,
            FractalKind::Mandelbrot,
        )
        .expect("default mandelbrot settings are valid")
    }
}

impl RenderConfig {
    pub fn new(
        pixel_rect: PixelRect,
        complex_rect: ComplexRect,
        max_iterations: u32,
        fractal: FractalKind,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            pixel_rect,
            complex_rect,
            engine: EscapeTimeEngine::new(max_iterations)?,
            fractal,
        })
    }

    /// Builds a config from raw image dimensions and `(start, end)` ranges
    /// for the real and imaginary axes.
    pub fn from_dimensions(
        width: u32,
        height: u32,
        real_range: (f64, f64),
        imag_range: (f64, f64),
        max_iterations: u32,
        fractal: FractalKind,
    ) -> Result<Self, ConfigError> {
        let pixel_rect = PixelRect::new(width, height)?;
        let complex_rect =
            ComplexRect::from_ranges(real_range.0, real_range.1, imag_range.0, imag_range.1)?;

        Self::new(pixel_rect, complex_rect, max_iterations, fractal)
    }

    #[must_use]
    pub fn julia_default() -> Self {
        Self::from_dimensions(
            400,
            480,
            (-1.0, 1.0),
            (-1.2, 1.2),
            DEFAULT_MAX_ITERATIONS,
            FractalKind::julia_default(),
        )
        .expect("default julia settings are valid")
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn complex_rect(&self) -> ComplexRect {
        self.complex_rect
    }

    #[must_use]
    pub fn engine(&self) -> EscapeTimeEngine {
        self.engine
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.engine.max_iterations()
    }

    #[must_use]
    pub fn fractal(&self) -> FractalKind {
        self.fractal
    }
}
