use crate::core::actions::build_histogram::build_histogram::build_cumulative_hue_table;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_maps::colour_map::FractalColourMap;
use crate::core::colour_maps::errors::{ColourMapError, checked_iterations};
use crate::core::colour_maps::kinds::ColourMapKind;
use crate::core::data::colour::{Colour, Hsv};
use crate::core::data::cumulative_hue_table::CumulativeHueTable;
use crate::core::data::escape_field::EscapeField;
use crate::core::data::escape_time::{EscapeTime, IterationCount};
use crate::core::util::hsv_to_rgb::hsv_to_rgb;

/// Hue taken from the cumulative distribution of escape times over the
/// whole field, so each hue band covers roughly the same number of pixels.
///
/// The table is built once from a complete field and then shared read-only
/// by every pixel lookup.
#[derive(Debug)]
pub struct HistogramHueMap {
    table: CumulativeHueTable,
    max_iterations: u32,
}

impl<N: IterationCount> ColourMap<EscapeTime<N>> for HistogramHueMap {
    fn map(&self, value: EscapeTime<N>) -> Result<Colour, ColourMapError> {
        let iterations = checked_iterations(value.iterations().to_f64(), self.max_iterations)?;
        let fraction = self.table.interpolate(iterations).clamp(0.0, 1.0);
        let h = 255 - (255.0 * fraction).floor() as u8;
        let v = if value.has_escaped() { 255 } else { 0 };

        Ok(hsv_to_rgb(Hsv { h, s: 255, v }))
    }

    fn display_name(&self) -> &str {
        ColourMapKind::HistogramHue.display_name()
    }
}

impl<N: IterationCount> FractalColourMap<N> for HistogramHueMap {
    fn kind(&self) -> ColourMapKind {
        ColourMapKind::HistogramHue
    }
}

impl HistogramHueMap {
    #[must_use]
    pub fn new(table: CumulativeHueTable, max_iterations: u32) -> Self {
        Self {
            table,
            max_iterations,
        }
    }

    #[must_use]
    pub fn from_field<N: IterationCount>(field: &EscapeField<N>) -> Self {
        Self::new(build_cumulative_hue_table(field), field.max_iterations())
    }

    #[must_use]
    pub fn table(&self) -> &CumulativeHueTable {
        &self.table
    }
}
