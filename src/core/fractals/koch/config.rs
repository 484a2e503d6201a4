use crate::core::data::point::Point;

const DEFAULT_SIZE: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KochConfig {
    pub centre: Point,
    /// Side length of the starting triangle.
    pub size: f64,
}

impl Default for KochConfig {
    fn default() -> Self {
        Self {
            centre: Point::ORIGIN,
            size: DEFAULT_SIZE,
        }
    }
}
