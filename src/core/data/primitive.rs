use crate::core::data::colour::Colour;
use crate::core::data::point::Point;

/// Smallest drawable unit handed to a renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    FilledPolygon {
        vertices: Vec<Point>,
        colour: Colour,
        opacity: f64,
    },
    LineSegment {
        from: Point,
        to: Point,
        colour: Colour,
        width: f64,
        opacity: f64,
    },
}

impl Primitive {
    #[must_use]
    pub fn colour(&self) -> Colour {
        match self {
            Self::FilledPolygon { colour, .. } | Self::LineSegment { colour, .. } => *colour,
        }
    }

    #[must_use]
    pub fn opacity(&self) -> f64 {
        match self {
            Self::FilledPolygon { opacity, .. } | Self::LineSegment { opacity, .. } => *opacity,
        }
    }

    #[must_use]
    pub fn is_line_segment(&self) -> bool {
        matches!(self, Self::LineSegment { .. })
    }
}
