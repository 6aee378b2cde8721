use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::escape_time::EscapeTime;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::fractals::escape_time::{EscapeMode, EscapeTimeEngine};
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::render_config::RenderConfig;
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};
use std::marker::PhantomData;

/// Samples one pixel of a Mandelbrot or Julia render.
#[derive(Debug, PartialEq)]
pub struct EscapeTimeAlgorithm<M: EscapeMode> {
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
    engine: EscapeTimeEngine,
    fractal: FractalKind,
    mode: PhantomData<M>,
}

impl<M: EscapeMode> FractalAlgorithm for EscapeTimeAlgorithm<M> {
    type Success = EscapeTime<M::Count>;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let sample = pixel_to_complex_coords(pixel, self.pixel_rect, self.complex_rect)?;
        let (c, z0) = self.fractal.bind(sample);

        Ok(M::escape(&self.engine, c, z0))
    }

    fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }
}

impl<M: EscapeMode> EscapeTimeAlgorithm<M> {
    #[must_use]
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            pixel_rect: config.pixel_rect(),
            complex_rect: config.complex_rect(),
            engine: config.engine(),
            fractal: config.fractal(),
            mode: PhantomData,
        }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.engine.max_iterations()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::fractals::escape_time::{Discrete, Smoothed};

    fn mandelbrot_config() -> RenderConfig {
        RenderConfig::from_dimensions(
            10,
            10,
            (-2.0, 1.0),
            (-1.0, 1.0),
            20,
            FractalKind::Mandelbrot,
        )
        .unwrap()
    }

    #[test]
    fn compute_maps_pixel_before_iterating() {
        let algorithm = EscapeTimeAlgorithm::<Discrete>::new(&mandelbrot_config());

        // pixel (0, 0) samples -2 - 1i, which is outside the radius after one step
        assert_eq!(
            algorithm.compute(Point { x: 0, y: 0 }),
            Ok(EscapeTime::escaped(1))
        );
    }

    #[test]
    fn compute_finds_bounded_interior_pixel() {
        let algorithm = EscapeTimeAlgorithm::<Smoothed>::new(&mandelbrot_config());

        // pixel (5, 5) samples -0.5 + 0i, inside the main cardioid
        assert_eq!(
            algorithm.compute(Point { x: 5, y: 5 }),
            Ok(EscapeTime::bounded(20))
        );
    }

    #[test]
    fn julia_uses_sample_as_starting_state() {
        let config = RenderConfig::from_dimensions(
            4,
            4,
            (-1.0, 1.0),
            (-1.0, 1.0),
            30,
            FractalKind::julia_default(),
        )
        .unwrap();
        let algorithm = EscapeTimeAlgorithm::<Discrete>::new(&config);
        let engine = EscapeTimeEngine::new(30).unwrap();

        // pixel (1, 3) samples -0.5 + 0.5i
        assert_eq!(
            algorithm.compute(Point { x: 1, y: 3 }),
            Ok(engine.discrete(Complex::new(0.285, 0.01), Complex::new(-0.5, 0.5)))
        );
    }

    #[test]
    fn compute_returns_error_for_pixel_outside_pixel_rect() {
        let config = mandelbrot_config();
        let algorithm = EscapeTimeAlgorithm::<Discrete>::new(&config);
        let point = Point { x: 10, y: 0 };

        assert_eq!(
            algorithm.compute(point),
            Err(PixelToComplexCoordsError::PointOutsideRect {
                point,
                pixel_rect: config.pixel_rect()
            })
        );
    }
}
