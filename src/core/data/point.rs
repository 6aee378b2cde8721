/// A pixel coordinate; `x` grows to the right and `y` grows downwards.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}
