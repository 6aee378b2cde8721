use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Evaluates every pixel on the calling thread, row-major.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    (0..pixel_rect.height())
        .flat_map(|y| (0..pixel_rect.width()).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
