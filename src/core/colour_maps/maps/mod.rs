pub mod direct_hue;
pub mod grayscale;
pub mod histogram_hue;
