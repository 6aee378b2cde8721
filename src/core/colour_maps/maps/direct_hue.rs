use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_maps::colour_map::FractalColourMap;
use crate::core::colour_maps::errors::{ColourMapError, checked_iterations};
use crate::core::colour_maps::kinds::ColourMapKind;
use crate::core::data::colour::{Colour, Hsv};
use crate::core::data::escape_time::{EscapeTime, IterationCount};
use crate::core::util::hsv_to_rgb::hsv_to_rgb;

/// Spreads iteration counts linearly around the hue wheel at full
/// saturation. Bounded points have zero value.
#[derive(Debug)]
pub struct DirectHueMap {
    max_iterations: u32,
}

impl<N: IterationCount> ColourMap<EscapeTime<N>> for DirectHueMap {
    fn map(&self, value: EscapeTime<N>) -> Result<Colour, ColourMapError> {
        let iterations = checked_iterations(value.iterations().to_f64(), self.max_iterations)?;
        let h = (iterations * 255.0 / f64::from(self.max_iterations)).floor() as u8;
        let v = if value.has_escaped() { 255 } else { 0 };

        Ok(hsv_to_rgb(Hsv { h, s: 255, v }))
    }

    fn display_name(&self) -> &str {
        ColourMapKind::Hue.display_name()
    }
}

impl<N: IterationCount> FractalColourMap<N> for DirectHueMap {
    fn kind(&self) -> ColourMapKind {
        ColourMapKind::Hue
    }
}

impl DirectHueMap {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}
