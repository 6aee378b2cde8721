pub mod build_histogram;
pub mod generate_fractal;
pub mod generate_pixel_buffer;
