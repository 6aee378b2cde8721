use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

fn pixel_rect_to_buffer_size(pixel_rect: PixelRect) -> usize {
    pixel_rect.size() * 3
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelBufferError {
    BoundsMismatch {
        pixel_rect_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                pixel_rect_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "pixel rect size {} does not match buffer size {}",
                    pixel_rect_size, buffer_size
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// The colour field of a render: packed RGB8, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pixel_rect: PixelRect,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    pub fn from_data(
        pixel_rect: PixelRect,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let buffer_size = pixel_rect_to_buffer_size(pixel_rect);

        if buffer_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                pixel_rect_size: buffer_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { pixel_rect, buffer })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        let index = self.pixel_rect.index_of(pixel)? * 3;

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_pixel_rect(width: u32, height: u32) -> PixelRect {
        PixelRect::new(width, height).unwrap()
    }

    #[test]
    fn test_from_data_valid() {
        let pixel_rect = create_pixel_rect(2, 2);
        let data: Vec<u8> = vec![
            255, 0, 0, // pixel (0,0) - red
            0, 255, 0, // pixel (1,0) - green
            0, 0, 255, // pixel (0,1) - blue
            255, 255, 0, // pixel (1,1) - yellow
        ];

        let buffer = PixelBuffer::from_data(pixel_rect, data.clone()).unwrap();

        assert_eq!(buffer.pixel_rect(), pixel_rect);
        assert_eq!(buffer.buffer(), &data);
        assert_eq!(
            buffer.pixel(Point { x: 0, y: 1 }),
            Some(Colour { r: 0, g: 0, b: 255 })
        );
    }

    #[test]
    fn test_from_data_buffer_too_small() {
        let pixel_rect = create_pixel_rect(2, 2);
        let data: Vec<u8> = vec![255, 0, 0]; // Only 3 bytes, need 12

        let result = PixelBuffer::from_data(pixel_rect, data);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                pixel_rect_size: 12,
                buffer_size: 3
            }
        );
    }

    #[test]
    fn test_from_data_buffer_too_large() {
        let pixel_rect = create_pixel_rect(2, 2);
        let data: Vec<u8> = vec![0; 24];

        let result = PixelBuffer::from_data(pixel_rect, data);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                pixel_rect_size: 12,
                buffer_size: 24
            }
        );
    }
}
