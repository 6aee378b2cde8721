pub mod colour;
pub mod complex;
pub mod complex_rect;
pub mod cumulative_hue_table;
pub mod escape_field;
pub mod escape_time;
pub mod histogram;
pub mod pixel_buffer;
pub mod pixel_rect;
pub mod point;
