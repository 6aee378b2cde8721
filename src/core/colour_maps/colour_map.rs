use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_maps::errors::ColourMapError;
use crate::core::colour_maps::kinds::ColourMapKind;
use crate::core::data::colour::Colour;
use crate::core::data::escape_time::{EscapeTime, IterationCount};

pub trait FractalColourMap<N: IterationCount>: ColourMap<EscapeTime<N>> + Send + Sync {
    fn kind(&self) -> ColourMapKind;
}

impl<N: IterationCount> ColourMap<EscapeTime<N>> for Box<dyn FractalColourMap<N>> {
    fn map(&self, value: EscapeTime<N>) -> Result<Colour, ColourMapError> {
        (**self).map(value)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}
