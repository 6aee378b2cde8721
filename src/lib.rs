mod controllers;
mod core;
mod presenters;

pub use controllers::ports::file_presenter::{
    FilePresenterPort, OutputFormat, PresentError, UnknownOutputFormat,
};
pub use controllers::render::{RenderController, RenderError};

pub use crate::core::actions::build_histogram::build_histogram::{
    build_cumulative_hue_table, build_histogram,
};
pub use crate::core::actions::generate_fractal::generate_escape_field::{
    GenerateEscapeFieldError, generate_escape_field,
};
pub use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
pub use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, colourise_escape_field, generate_pixel_buffer,
};
pub use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;

pub use crate::core::colour_maps::colour_map::FractalColourMap;
pub use crate::core::colour_maps::errors::ColourMapError;
pub use crate::core::colour_maps::factory::colour_map_factory;
pub use crate::core::colour_maps::kinds::{ColourMapKind, UnknownColourMapKind};
pub use crate::core::colour_maps::maps::{
    direct_hue::DirectHueMap, grayscale::GrayscaleMap, histogram_hue::HistogramHueMap,
};

pub use crate::core::data::colour::{Colour, Hsv};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use crate::core::data::cumulative_hue_table::CumulativeHueTable;
pub use crate::core::data::escape_field::{EscapeField, EscapeFieldError};
pub use crate::core::data::escape_time::{EscapeTime, IterationCount};
pub use crate::core::data::histogram::Histogram;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;

pub use crate::core::fractals::algorithm::EscapeTimeAlgorithm;
pub use crate::core::fractals::escape_time::{
    Discrete, EscapeMode, EscapeTimeEngine, EscapeTimeError, Smoothed,
};
pub use crate::core::fractals::fractal_kinds::{DEFAULT_JULIA_CONSTANT, FractalKind};
pub use crate::core::fractals::render_config::{ConfigError, DEFAULT_MAX_ITERATIONS, RenderConfig};

pub use crate::core::util::hsv_to_rgb::hsv_to_rgb;
pub use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

pub use presenters::file::image_file::ImageFilePresenter;
