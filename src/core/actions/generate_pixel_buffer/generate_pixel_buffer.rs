use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_maps::errors::ColourMapError;
use crate::core::data::colour::Colour;
use crate::core::data::escape_field::EscapeField;
use crate::core::data::escape_time::{EscapeTime, IterationCount};
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use crate::core::data::pixel_rect::PixelRect;
use rayon::prelude::*;
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum GeneratePixelBufferError {
    ColourMap(ColourMapError),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<ColourMapError> for GeneratePixelBufferError {
    fn from(err: ColourMapError) -> Self {
        Self::ColourMap(err)
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Generates a pixel buffer by mapping input values to colours.
///
/// Each value owns one RGB triple in the output, so the values are coloured
/// in parallel straight into a preallocated buffer. The first failing value
/// aborts the whole buffer.
pub fn generate_pixel_buffer<T, CMap>(
    input: &[T],
    mapper: &CMap,
    pixel_rect: PixelRect,
) -> Result<PixelBuffer, GeneratePixelBufferError>
where
    T: Copy + Sync,
    CMap: ColourMap<T> + Sync,
{
    let mut buffer: PixelBufferData = vec![0; input.len() * 3];

    buffer
        .par_chunks_mut(3)
        .zip(input.par_iter())
        .try_for_each(|(pixel, &value)| {
            let Colour { r, g, b } = mapper.map(value)?;
            pixel.copy_from_slice(&[r, g, b]);

            Ok::<(), ColourMapError>(())
        })?;

    Ok(PixelBuffer::from_data(pixel_rect, buffer)?)
}

/// Colours a complete escape field with one style.
pub fn colourise_escape_field<N, CMap>(
    field: &EscapeField<N>,
    mapper: &CMap,
) -> Result<PixelBuffer, GeneratePixelBufferError>
where
    N: IterationCount,
    CMap: ColourMap<EscapeTime<N>> + Sync,
{
    generate_pixel_buffer(field.values(), mapper, field.pixel_rect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colour_maps::colour_map::FractalColourMap;
    use crate::core::colour_maps::factory::colour_map_factory;
    use crate::core::colour_maps::kinds::ColourMapKind;
    use crate::core::data::point::Point;

    #[derive(Debug)]
    struct StubColourMapSuccess {}

    impl ColourMap<u8> for StubColourMapSuccess {
        fn map(&self, value: u8) -> Result<Colour, ColourMapError> {
            Ok(Colour {
                r: value,
                g: value,
                b: value,
            })
        }

        fn display_name(&self) -> &str {
            "Stub Success"
        }
    }

    #[derive(Debug)]
    struct StubColourMapFailure {}

    impl ColourMap<u8> for StubColourMapFailure {
        fn map(&self, _: u8) -> Result<Colour, ColourMapError> {
            Err(ColourMapError::NotANumber)
        }

        fn display_name(&self) -> &str {
            "Stub Failure"
        }
    }

    #[test]
    fn test_generates_pixel_buffer_correctly() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let mapper = StubColourMapSuccess {};
        let pixel_rect = PixelRect::new(3, 2).unwrap();
        let expected_buffer: PixelBufferData =
            vec![1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 6];
        let expected_results = PixelBuffer::from_data(pixel_rect, expected_buffer).unwrap();
        let results = generate_pixel_buffer(&input, &mapper, pixel_rect).unwrap();

        assert_eq!(results.buffer(), expected_results.buffer());
        assert_eq!(results.pixel_rect(), expected_results.pixel_rect());
        assert_eq!(results.buffer_size(), expected_results.buffer_size());
    }

    #[test]
    fn test_propagates_colour_map_failure() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let mapper = StubColourMapFailure {};
        let pixel_rect = PixelRect::new(3, 2).unwrap();
        let results = generate_pixel_buffer(&input, &mapper, pixel_rect);

        assert_eq!(
            results,
            Err(GeneratePixelBufferError::ColourMap(
                ColourMapError::NotANumber
            ))
        );
    }

    #[test]
    fn test_pixel_rect_input_size_mismatch_returns_err() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let mapper = StubColourMapSuccess {};
        let pixel_rect = PixelRect::new(2, 2).unwrap();
        let results = generate_pixel_buffer(&input, &mapper, pixel_rect);

        assert_eq!(
            results,
            Err(GeneratePixelBufferError::PixelBuffer(
                PixelBufferError::BoundsMismatch {
                    pixel_rect_size: 12,
                    buffer_size: 18
                }
            ))
        );
    }

    #[test]
    fn test_large_input_keeps_row_major_order() {
        let input: Vec<u8> = (0..=255).cycle().take(64 * 64).collect();
        let mapper = StubColourMapSuccess {};
        let pixel_rect = PixelRect::new(64, 64).unwrap();

        let results = generate_pixel_buffer(&input, &mapper, pixel_rect).unwrap();

        for (i, &value) in input.iter().enumerate() {
            let point = Point {
                x: (i % 64) as u32,
                y: (i / 64) as u32,
            };
            assert_eq!(results.pixel(point), Some(Colour::grey(value)));
        }
    }

    #[test]
    fn test_colourise_escape_field_with_boxed_map() {
        let pixel_rect = PixelRect::new(2, 1).unwrap();
        let field = EscapeField::from_values(
            pixel_rect,
            20,
            vec![EscapeTime::escaped(1u32), EscapeTime::bounded(20)],
        )
        .unwrap();
        let map: Box<dyn FractalColourMap<u32>> =
            colour_map_factory(ColourMapKind::Grayscale, &field);

        let results = colourise_escape_field(&field, &map).unwrap();

        assert_eq!(results.buffer(), &vec![243, 243, 243, 0, 0, 0]);
    }
}
