use crate::core::data::point::Point;

const DEFAULT_HALF_SIZE: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SierpinskiConfig {
    pub triangle: [Point; 3],
}

impl Default for SierpinskiConfig {
    fn default() -> Self {
        Self {
            triangle: [
                Point::new(-DEFAULT_HALF_SIZE, -DEFAULT_HALF_SIZE),
                Point::new(0.0, DEFAULT_HALF_SIZE),
                Point::new(DEFAULT_HALF_SIZE, -DEFAULT_HALF_SIZE),
            ],
        }
    }
}
