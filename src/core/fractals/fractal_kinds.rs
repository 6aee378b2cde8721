use crate::core::data::complex::Complex;

pub const DEFAULT_JULIA_CONSTANT: Complex = Complex::new(0.285, 0.01);

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FractalKind {
    #[default]
    Mandelbrot,
    Julia {
        c: Complex,
    },
}

impl FractalKind {
    #[must_use]
    pub const fn julia_default() -> Self {
        Self::Julia {
            c: DEFAULT_JULIA_CONSTANT,
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia { .. } => "Julia",
        }
    }

    /// Lower-case name used in output file names.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Mandelbrot => "mandelbrot",
            Self::Julia { .. } => "julia",
        }
    }

    /// Splits a sampled point into the `(c, z0)` pair the engine iterates.
    #[must_use]
    pub fn bind(self, sample: Complex) -> (Complex, Complex) {
        match self {
            Self::Mandelbrot => (sample, Complex::ZERO),
            Self::Julia { c } => (c, sample),
        }
    }
}

impl std::fmt::Display for FractalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mandelbrot => f.write_str(self.display_name()),
            Self::Julia { c } => write!(f, "{} (c = {} + {}i)", self.display_name(), c.real, c.imag),
        }
    }
}
