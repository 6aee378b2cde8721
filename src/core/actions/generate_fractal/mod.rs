pub mod generate_escape_field;
pub mod generate_fractal_parallel_rayon;
pub mod generate_fractal_serial;
pub mod ports;
