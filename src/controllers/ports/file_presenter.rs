use std::error::Error;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    #[default]
    Png,
    Ppm,
}

impl OutputFormat {
    pub const ALL: &'static [Self] = &[Self::Png, Self::Ppm];

    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Ppm => "ppm",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOutputFormat(pub String);

impl fmt::Display for UnknownOutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown output format '{}', expected png or ppm", self.0)
    }
}

impl Error for UnknownOutputFormat {}

impl FromStr for OutputFormat {
    type Err = UnknownOutputFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|format| format.extension().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownOutputFormat(s.to_string()))
    }
}

#[derive(Debug)]
pub enum PresentError {
    Io(std::io::Error),
    Encoding(image::ImageError),
    BufferMismatch {
        width: u32,
        height: u32,
        buffer_size: usize,
    },
}

impl fmt::Display for PresentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "i/o error: {}", err),
            Self::Encoding(err) => write!(f, "encoding error: {}", err),
            Self::BufferMismatch {
                width,
                height,
                buffer_size,
            } => write!(
                f,
                "buffer of {} bytes cannot hold a {}x{} RGB image",
                buffer_size, width, height
            ),
        }
    }
}

impl Error for PresentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Encoding(err) => Some(err),
            Self::BufferMismatch { .. } => None,
        }
    }
}

impl From<std::io::Error> for PresentError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<image::ImageError> for PresentError {
    fn from(err: image::ImageError) -> Self {
        Self::Encoding(err)
    }
}

pub trait FilePresenterPort {
    fn present(
        &self,
        buffer: &PixelBuffer,
        filepath: impl AsRef<Path>,
        format: OutputFormat,
    ) -> Result<(), PresentError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names() {
        assert_eq!("ppm".parse::<OutputFormat>(), Ok(OutputFormat::Ppm));
        assert_eq!(
            "gif".parse::<OutputFormat>(),
            Err(UnknownOutputFormat("gif".to_string()))
        );
    }

    #[test]
    fn buffer_mismatch_message() {
        let err = PresentError::BufferMismatch {
            width: 2,
            height: 2,
            buffer_size: 6,
        };

        assert_eq!(
            err.to_string(),
            "buffer of 6 bytes cannot hold a 2x2 RGB image"
        );
    }
}
