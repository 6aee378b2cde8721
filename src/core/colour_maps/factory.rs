use crate::core::colour_maps::colour_map::FractalColourMap;
use crate::core::colour_maps::kinds::ColourMapKind;
use crate::core::colour_maps::maps::{
    direct_hue::DirectHueMap, grayscale::GrayscaleMap, histogram_hue::HistogramHueMap,
};
use crate::core::data::escape_field::EscapeField;
use crate::core::data::escape_time::IterationCount;

/// Builds the colour map for `kind`. The histogram style reads the whole
/// field up front, the other styles only need its iteration budget.
#[must_use]
pub fn colour_map_factory<N: IterationCount + 'static>(
    kind: ColourMapKind,
    field: &EscapeField<N>,
) -> Box<dyn FractalColourMap<N>> {
    match kind {
        ColourMapKind::Grayscale => Box::new(GrayscaleMap::new(field.max_iterations())),
        ColourMapKind::Hue => Box::new(DirectHueMap::new(field.max_iterations())),
        ColourMapKind::HistogramHue => Box::new(HistogramHueMap::from_field(field)),
    }
}
