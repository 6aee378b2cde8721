use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Rows are computed independently and joined in order, so the output is
/// row-major and identical to [`generate_fractal_serial`].
///
/// [`generate_fractal_serial`]: crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial
pub fn generate_fractal_parallel_rayon<Alg>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let row_width = pixel_rect.width() as usize;

    let rows: Result<Vec<Vec<Alg::Success>>, Alg::Failure> = (0..pixel_rect.height())
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(row_width);

            for x in 0..pixel_rect.width() {
                row.push(algorithm.compute(Point { x, y })?);
            }

            Ok(row)
        })
        .collect();

    // Flatten rows into row-major order
    rows.map(|r| r.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
    use crate::core::fractals::algorithm::EscapeTimeAlgorithm;
    use crate::core::fractals::escape_time::Smoothed;
    use crate::core::fractals::fractal_kinds::FractalKind;
    use crate::core::fractals::render_config::RenderConfig;
    use std::error::Error;

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl std::fmt::Display for StubError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    #[derive(Debug)]
    struct StubSuccessAlgorithm {
        pixel_rect: PixelRect,
    }

    impl FractalAlgorithm for StubSuccessAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            Ok(u64::from(pixel.x) * 1000 + u64::from(pixel.y))
        }

        fn pixel_rect(&self) -> PixelRect {
            self.pixel_rect
        }
    }

    #[derive(Debug)]
    struct StubFailureAlgorithm {
        pixel_rect: PixelRect,
    }

    impl FractalAlgorithm for StubFailureAlgorithm {
        type Success = u64;
        type Failure = StubError;

        fn compute(&self, _: Point) -> Result<Self::Success, Self::Failure> {
            Err(StubError {})
        }

        fn pixel_rect(&self) -> PixelRect {
            self.pixel_rect
        }
    }

    #[test]
    fn test_rayon_generates_same_results_as_sequential() {
        let pixel_rect = PixelRect::new(11, 9).unwrap();
        let algorithm = StubSuccessAlgorithm { pixel_rect };

        let sequential_results = generate_fractal_serial(pixel_rect, &algorithm).unwrap();
        let rayon_results = generate_fractal_parallel_rayon(pixel_rect, &algorithm).unwrap();

        assert_eq!(rayon_results, sequential_results);
    }

    #[test]
    fn test_rayon_propagates_algorithm_failure() {
        let pixel_rect = PixelRect::new(4, 5).unwrap();
        let algorithm = StubFailureAlgorithm { pixel_rect };

        let result = generate_fractal_parallel_rayon(pixel_rect, &algorithm);

        assert_eq!(result, Err(StubError {}));
    }

    #[test]
    fn test_rayon_with_single_pixel() {
        let pixel_rect = PixelRect::new(1, 1).unwrap();
        let algorithm = StubSuccessAlgorithm { pixel_rect };

        let rayon_results = generate_fractal_parallel_rayon(pixel_rect, &algorithm).unwrap();

        assert_eq!(rayon_results, vec![0]);
    }

    #[test]
    fn test_rayon_matches_sequential_for_smoothed_julia() {
        let config = RenderConfig::from_dimensions(
            64,
            48,
            (-1.0, 1.0),
            (-1.2, 1.2),
            60,
            FractalKind::julia_default(),
        )
        .unwrap();
        let algorithm = EscapeTimeAlgorithm::<Smoothed>::new(&config);

        let sequential_results = generate_fractal_serial(config.pixel_rect(), &algorithm).unwrap();
        let rayon_results =
            generate_fractal_parallel_rayon(config.pixel_rect(), &algorithm).unwrap();

        assert_eq!(rayon_results, sequential_results);
    }
}
