use crate::core::data::point::Point;
use crate::core::errors::{FractalError, ensure_finite};

const HALF_SQRT_3: f64 = 0.866_025_403_784_438_6;

#[must_use]
pub fn midpoint(p1: Point, p2: Point) -> Point {
    Point {
        x: (p1.x + p2.x) / 2.0,
        y: (p1.y + p2.y) / 2.0,
    }
}

/// Point a fraction `t` of the way from `start` to `end`.
#[must_use]
pub fn lerp_point(start: Point, end: Point, t: f64) -> Point {
    start + (end - start) * t
}

/// Apex of the equilateral triangle erected on `start..end`, on the
/// right-hand side of the direction of travel.
///
/// Walking a boundary counter-clockwise keeps the interior on the left, so a
/// right-hand apex always points outward. The offset is built from the
/// segment vector itself, so a zero-length segment yields an apex at its
/// midpoint instead of dividing by zero.
#[must_use]
pub fn equilateral_apex(start: Point, end: Point) -> Point {
    let direction = end - start;
    midpoint(start, end) + direction.perpendicular() * HALF_SQRT_3
}

/// Rejects input points whose subdivision could overflow `f64`.
///
/// Every point the generators derive stays within the largest pairwise
/// distance of the inputs, and midpoints add two coordinates before halving,
/// so `2 * (largest coordinate + largest distance)` must stay finite.
pub(crate) fn ensure_bounded(points: &[Point], what: &'static str) -> Result<(), FractalError> {
    let magnitude = points
        .iter()
        .map(|p| p.x.abs().max(p.y.abs()))
        .fold(0.0, f64::max);
    let extent = points
        .iter()
        .flat_map(|&a| points.iter().map(move |&b| (b - a).length()))
        .fold(0.0, f64::max);

    ensure_finite((magnitude + extent) * 2.0, what)?;
    Ok(())
}

/// Signed area of a polygon; positive for counter-clockwise vertex order.
#[must_use]
pub fn signed_area(vertices: &[Point]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }

    let twice_area: f64 = vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum();

    twice_area / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_3;

    fn assert_close(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9,
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(
            midpoint(Point::new(-2.0, 4.0), Point::new(6.0, 0.0)),
            Point::new(2.0, 2.0)
        );
    }

    #[test]
    fn test_lerp_point_thirds() {
        let start = Point::new(0.0, 0.0);
        let end = Point::new(3.0, 6.0);

        assert_eq!(lerp_point(start, end, 0.0), start);
        assert_eq!(lerp_point(start, end, 1.0), end);
        assert_close(lerp_point(start, end, 1.0 / 3.0), Point::new(1.0, 2.0));
    }

    #[test]
    fn test_apex_sits_at_equilateral_height() {
        let start = Point::new(0.0, 0.0);
        let end = Point::new(2.0, 0.0);
        let apex = equilateral_apex(start, end);

        assert_close(apex, Point::new(1.0, -3.0_f64.sqrt()));
        assert!(((apex - start).length() - 2.0).abs() < 1e-12);
        assert!(((apex - end).length() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_apex_matches_clockwise_rotation_for_any_direction() {
        let segments = [
            (Point::new(1.0, 1.0), Point::new(4.0, 5.0)),
            (Point::new(-3.0, 2.0), Point::new(-7.0, -1.0)),
            (Point::new(0.5, -2.0), Point::new(0.5, 9.0)),
        ];

        for (start, end) in segments {
            let rotated = start + (end - start).rotate(-FRAC_PI_3);
            assert_close(equilateral_apex(start, end), rotated);
        }
    }

    #[test]
    fn test_apex_points_outward_on_counter_clockwise_boundary() {
        // unit square walked counter-clockwise
        let square = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        let centre = Point::new(0.5, 0.5);

        for i in 0..4 {
            let start = square[i];
            let end = square[(i + 1) % 4];
            let apex = equilateral_apex(start, end);

            assert!((apex - centre).length() > (midpoint(start, end) - centre).length());
        }
    }

    #[test]
    fn test_apex_of_zero_length_segment_is_coincident() {
        let p = Point::new(3.0, -1.0);
        assert_eq!(equilateral_apex(p, p), p);
    }

    #[test]
    fn test_ensure_bounded_accepts_ordinary_points() {
        let points = [Point::new(-200.0, -200.0), Point::new(0.0, 200.0)];
        assert_eq!(ensure_bounded(&points, "extent"), Ok(()));
    }

    #[test]
    fn test_ensure_bounded_rejects_overflowing_span() {
        let points = [Point::new(-1e308, 0.0), Point::new(1e308, 0.0)];

        assert_eq!(
            ensure_bounded(&points, "extent"),
            Err(FractalError::NonFiniteInput { what: "extent" })
        );
    }

    #[test]
    fn test_ensure_bounded_rejects_coordinates_near_the_limit() {
        // each coordinate is finite but a midpoint sum would not be
        let points = [Point::new(1.5e308, 0.0), Point::new(1.6e308, 0.0)];

        assert!(ensure_bounded(&points, "extent").is_err());
    }

    #[test]
    fn test_signed_area_orientation() {
        let ccw = [Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(0.0, 2.0)];
        let cw = [Point::new(0.0, 0.0), Point::new(0.0, 2.0), Point::new(2.0, 0.0)];

        assert_eq!(signed_area(&ccw), 2.0);
        assert_eq!(signed_area(&cw), -2.0);
        assert_eq!(signed_area(&ccw[..2]), 0.0);
    }
}
