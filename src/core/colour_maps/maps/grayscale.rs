use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_maps::colour_map::FractalColourMap;
use crate::core::colour_maps::errors::{ColourMapError, checked_iterations};
use crate::core::colour_maps::kinds::ColourMapKind;
use crate::core::data::colour::Colour;
use crate::core::data::escape_time::{EscapeTime, IterationCount};

/// Fast escapes are bright, bounded points are black.
#[derive(Debug)]
pub struct GrayscaleMap {
    max_iterations: u32,
}

impl<N: IterationCount> ColourMap<EscapeTime<N>> for GrayscaleMap {
    fn map(&self, value: EscapeTime<N>) -> Result<Colour, ColourMapError> {
        let iterations = checked_iterations(value.iterations().to_f64(), self.max_iterations)?;
        let shade = (iterations * 255.0 / f64::from(self.max_iterations)).floor() as u8;

        Ok(Colour::grey(255 - shade))
    }

    fn display_name(&self) -> &str {
        ColourMapKind::Grayscale.display_name()
    }
}

impl<N: IterationCount> FractalColourMap<N> for GrayscaleMap {
    fn kind(&self) -> ColourMapKind {
        ColourMapKind::Grayscale
    }
}

impl GrayscaleMap {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
