use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToComplexCoordsError {
    PointOutsideRect { point: Point, pixel_rect: PixelRect },
}

impl fmt::Display for PixelToComplexCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideRect { point, pixel_rect } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} pixel rectangle",
                    point.x,
                    point.y,
                    pixel_rect.width(),
                    pixel_rect.height()
                )
            }
        }
    }
}

impl Error for PixelToComplexCoordsError {}

/// Maps a pixel onto the complex plane.
///
/// ```text
/// real = re_start + (x / width)  * (re_end - re_start)
/// imag = im_start + (y / height) * (im_end - im_start)
/// ```
///
/// Pixel (0, 0) lands exactly on the window's start corner; the last pixel
/// lands one pixel step short of the end corner.
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
) -> Result<Complex, PixelToComplexCoordsError> {
    if !pixel_rect.contains_point(pixel_position) {
        return Err(PixelToComplexCoordsError::PointOutsideRect {
            point: pixel_position,
            pixel_rect,
        });
    }

    let x = f64::from(pixel_position.x) / f64::from(pixel_rect.width());
    let y = f64::from(pixel_position.y) / f64::from(pixel_rect.height());
    let real = complex_rect.top_left().real + x * complex_rect.width();
    let imag = complex_rect.top_left().imag + y * complex_rect.height();

    Ok(Complex { real, imag })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic_window() -> ComplexRect {
        ComplexRect::from_ranges(-2.0, 1.0, -1.0, 1.0).unwrap()
    }

    #[test]
    fn test_pixel_to_complex_top_left() {
        let pixel_rect = PixelRect::new(600, 400).unwrap();

        let result =
            pixel_to_complex_coords(Point { x: 0, y: 0 }, pixel_rect, classic_window()).unwrap();

        assert_eq!(result, Complex::new(-2.0, -1.0));
    }

    #[test]
    fn test_pixel_to_complex_bottom_right_within_one_pixel_of_end() {
        let pixel_rect = PixelRect::new(600, 400).unwrap();
        let complex_rect = classic_window();
        let step_real = complex_rect.width() / 600.0;
        let step_imag = complex_rect.height() / 400.0;

        let result =
            pixel_to_complex_coords(pixel_rect.bottom_right(), pixel_rect, complex_rect).unwrap();

        assert!(result.real < 1.0);
        assert!(result.imag < 1.0);
        assert!(1.0 - result.real <= step_real + 1e-12);
        assert!(1.0 - result.imag <= step_imag + 1e-12);
    }

    #[test]
    fn test_pixel_to_complex_center() {
        let pixel_rect = PixelRect::new(100, 100).unwrap();
        let complex_rect = ComplexRect::from_ranges(-1.0, 1.0, -1.0, 1.0).unwrap();

        let result =
            pixel_to_complex_coords(Point { x: 50, y: 50 }, pixel_rect, complex_rect).unwrap();

        assert_eq!(result, Complex::ZERO);
    }

    #[test]
    fn test_mapping_is_affine_along_a_row() {
        let pixel_rect = PixelRect::new(10, 10).unwrap();
        let complex_rect = classic_window();

        let reals: Vec<f64> = (0..10)
            .map(|x| {
                pixel_to_complex_coords(Point { x, y: 3 }, pixel_rect, complex_rect)
                    .unwrap()
                    .real
            })
            .collect();

        for pair in reals.windows(2) {
            assert!((pair[1] - pair[0] - 0.3).abs() < 1e-12);
        }
    }

    #[test]
    fn test_pixel_outside_rect_fails() {
        let pixel_rect = PixelRect::new(100, 100).unwrap();
        let point = Point { x: 100, y: 10 };

        let result = pixel_to_complex_coords(point, pixel_rect, classic_window());

        assert_eq!(
            result,
            Err(PixelToComplexCoordsError::PointOutsideRect { point, pixel_rect })
        );
    }
}
