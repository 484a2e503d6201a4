use log::debug;

use crate::core::colour::depth_colour_map::DepthColourMap;
use crate::core::data::depth::Depth;
use crate::core::data::point::Point;
use crate::core::data::primitive::Primitive;
use crate::core::errors::{FractalError, ensure_finite};
use crate::core::fractals::emission::Emission;
use crate::core::fractals::style::{koch_line_width, koch_opacity};
use crate::core::util::geometry::{ensure_bounded, equilateral_apex, lerp_point};

#[derive(Debug, Copy, Clone, PartialEq)]
struct Segment {
    start: Point,
    end: Point,
    depth: u32,
}

/// Lazily emits Koch curve segments, depth-first and in curve order.
///
/// Every segment bends to the right of its direction of travel, so curves
/// laid along a counter-clockwise boundary all bulge outward.
#[derive(Debug)]
pub struct KochSegments<C> {
    stack: Vec<Segment>,
    max_depth: u32,
    colours: C,
    emission: Emission,
}

impl<C: DepthColourMap> KochSegments<C> {
    fn new(sides: &[(Point, Point)], max_depth: u32, colours: C, emission: Emission) -> Self {
        let stack = sides
            .iter()
            .rev()
            .map(|&(start, end)| Segment {
                start,
                end,
                depth: max_depth,
            })
            .collect();

        Self {
            stack,
            max_depth,
            colours,
            emission,
        }
    }
}

/// The four sub-segments replacing `start..end`: the outer thirds plus the
/// two sides of the equilateral bump raised on the middle third.
fn subdivide(start: Point, end: Point) -> [(Point, Point); 4] {
    let p2 = lerp_point(start, end, 1.0 / 3.0);
    let p4 = lerp_point(start, end, 2.0 / 3.0);
    let p3 = equilateral_apex(p2, p4);

    [(start, p2), (p2, p3), (p3, p4), (p4, end)]
}

impl<C: DepthColourMap> Iterator for KochSegments<C> {
    type Item = Primitive;

    fn next(&mut self) -> Option<Primitive> {
        while let Some(Segment { start, end, depth }) = self.stack.pop() {
            if depth > 0 {
                for (from, to) in subdivide(start, end).into_iter().rev() {
                    self.stack.push(Segment {
                        start: from,
                        end: to,
                        depth: depth - 1,
                    });
                }
            }

            if self.emission.emits(depth) {
                return Some(Primitive::LineSegment {
                    from: start,
                    to: end,
                    colour: self.colours.colour(depth, self.max_depth),
                    width: koch_line_width(depth, self.max_depth),
                    opacity: koch_opacity(depth, self.max_depth),
                });
            }
        }

        None
    }
}

pub fn koch_curve<C: DepthColourMap>(
    start: Point,
    end: Point,
    depth: Depth,
    colours: C,
    emission: Emission,
) -> Result<KochSegments<C>, FractalError> {
    start.ensure_finite("curve start")?;
    end.ensure_finite("curve end")?;
    ensure_bounded(&[start, end], "curve extent")?;

    debug!("koch curve: depth {} ({:?})", depth, emission);

    Ok(KochSegments::new(&[(start, end)], depth.get(), colours, emission))
}

/// A closed snowflake: three Koch curves over the sides of an equilateral
/// triangle, walked counter-clockwise.
#[derive(Debug)]
pub struct KochSnowflake<C> {
    vertices: [Point; 3],
    depth: Depth,
    colours: C,
    emission: Emission,
}

pub fn koch_snowflake<C: DepthColourMap>(
    centre: Point,
    size: f64,
    depth: Depth,
    colours: C,
    emission: Emission,
) -> Result<KochSnowflake<C>, FractalError> {
    centre.ensure_finite("snowflake centre")?;
    ensure_finite(size, "snowflake size")?;

    if size < 0.0 {
        return Err(FractalError::InvalidSize {
            what: "snowflake size",
            value: size,
        });
    }

    // centroid-to-vertex distance of an equilateral triangle with side `size`
    let radius = size / 3.0_f64.sqrt();
    let vertices = [
        centre + Point::new(0.0, radius),
        centre + Point::new(-size / 2.0, -radius / 2.0),
        centre + Point::new(size / 2.0, -radius / 2.0),
    ];
    ensure_bounded(&vertices, "snowflake extent")?;

    debug!("koch snowflake: depth {}, side {} ({:?})", depth, size, emission);

    Ok(KochSnowflake {
        vertices,
        depth,
        colours,
        emission,
    })
}

impl<C: DepthColourMap> KochSnowflake<C> {
    #[must_use]
    pub fn vertices(&self) -> [Point; 3] {
        self.vertices
    }

    /// Start and end of each side, in boundary order.
    #[must_use]
    pub fn sides(&self) -> [(Point, Point); 3] {
        let [a, b, c] = self.vertices;
        [(a, b), (b, c), (c, a)]
    }

    /// The curve over one side; `side` is taken modulo 3.
    #[must_use]
    pub fn curve(&self, side: usize) -> KochSegments<&C> {
        let (start, end) = self.sides()[side % 3];
        KochSegments::new(&[(start, end)], self.depth.get(), &self.colours, self.emission)
    }
}

impl<C: DepthColourMap> IntoIterator for KochSnowflake<C> {
    type Item = Primitive;
    type IntoIter = KochSegments<C>;

    fn into_iter(self) -> KochSegments<C> {
        let sides = self.sides();
        KochSegments::new(&sides, self.depth.get(), self.colours, self.emission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colour::maps::continuous_gradient::ContinuousGradient;
    use crate::core::data::palette::Palette;
    use crate::core::util::geometry::signed_area;

    fn colours() -> ContinuousGradient {
        ContinuousGradient::new(Palette::from_hex(&["#e74c3c", "#3498db"]).unwrap())
    }

    fn endpoints(primitive: &Primitive) -> (Point, Point) {
        match primitive {
            Primitive::LineSegment { from, to, .. } => (*from, *to),
            Primitive::FilledPolygon { .. } => panic!("unexpected polygon"),
        }
    }

    fn leaves(snowflake: &KochSnowflake<ContinuousGradient>, side: usize) -> Vec<(Point, Point)> {
        snowflake.curve(side).map(|p| endpoints(&p)).collect()
    }

    fn snowflake(depth: i64, emission: Emission) -> KochSnowflake<ContinuousGradient> {
        let depth = Depth::new(depth).unwrap();
        koch_snowflake(Point::ORIGIN, 300.0, depth, colours(), emission).unwrap()
    }

    #[test]
    fn test_curve_depth_zero_is_single_segment() {
        let start = Point::new(0.0, 0.0);
        let end = Point::new(3.0, 0.0);
        let primitives: Vec<Primitive> =
            koch_curve(start, end, Depth::ZERO, colours(), Emission::Layered).unwrap().collect();

        assert_eq!(primitives.len(), 1);
        assert_eq!(endpoints(&primitives[0]), (start, end));
    }

    #[test]
    fn test_curve_depth_one_construction() {
        let start = Point::new(0.0, 0.0);
        let end = Point::new(3.0, 0.0);
        let segments: Vec<(Point, Point)> =
            koch_curve(start, end, Depth::new(1).unwrap(), colours(), Emission::LeavesOnly)
                .unwrap()
                .map(|p| endpoints(&p))
                .collect();

        let apex = segments[1].1;
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[0], (start, Point::new(1.0, 0.0)));
        assert!((apex.x - 1.5).abs() < 1e-12);
        assert!((apex.y + 3.0_f64.sqrt() / 2.0).abs() < 1e-12);
        assert_eq!(segments[3], (Point::new(2.0, 0.0), end));
    }

    #[test]
    fn test_layered_count_includes_intermediate_levels() {
        for depth in 0..=5_u32 {
            let count = koch_curve(
                Point::ORIGIN,
                Point::new(1.0, 0.0),
                Depth::try_from(depth).unwrap(),
                colours(),
                Emission::Layered,
            )
            .unwrap()
            .count();
            let expected: usize = (0..=depth).map(|k| 4_usize.pow(k)).sum();

            assert_eq!(count, expected);
        }
    }

    #[test]
    fn test_leaves_only_count() {
        for depth in 0..=5_u32 {
            let count = koch_curve(
                Point::ORIGIN,
                Point::new(1.0, 0.0),
                Depth::try_from(depth).unwrap(),
                colours(),
                Emission::LeavesOnly,
            )
            .unwrap()
            .count();

            assert_eq!(count, 4_usize.pow(depth));
        }
    }

    #[test]
    fn test_leaves_form_a_connected_polyline() {
        let segments: Vec<(Point, Point)> = koch_curve(
            Point::new(-1.0, 2.0),
            Point::new(5.0, -3.0),
            Depth::new(4).unwrap(),
            colours(),
            Emission::LeavesOnly,
        )
        .unwrap()
        .map(|p| endpoints(&p))
        .collect();

        for pair in segments.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }
        assert_eq!(segments.first().unwrap().0, Point::new(-1.0, 2.0));
        assert_eq!(segments.last().unwrap().1, Point::new(5.0, -3.0));
    }

    #[test]
    fn test_snowflake_depth_zero_is_triangle_outline() {
        let flake = snowflake(0, Emission::Layered);
        let segments: Vec<(Point, Point)> = flake.into_iter().map(|p| endpoints(&p)).collect();

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].1, segments[1].0);
        assert_eq!(segments[1].1, segments[2].0);
        assert_eq!(segments[2].1, segments[0].0);
    }

    #[test]
    fn test_snowflake_triangle_is_equilateral_and_counter_clockwise() {
        let flake = snowflake(0, Emission::Layered);
        let vertices = flake.vertices();

        for (start, end) in flake.sides() {
            assert!(((end - start).length() - 300.0).abs() < 1e-9);
        }
        assert!(signed_area(&vertices) > 0.0);
    }

    #[test]
    fn test_snowflake_curves_close_end_to_end() {
        for depth in 0..=4 {
            let flake = snowflake(depth, Emission::LeavesOnly);

            for side in 0..3 {
                let current = leaves(&flake, side);
                let next = leaves(&flake, side + 1);
                assert_eq!(current.last().unwrap().1, next.first().unwrap().0);
            }
        }
    }

    #[test]
    fn test_snowflake_bumps_point_outward() {
        let flake = snowflake(1, Emission::LeavesOnly);
        let inradius = 300.0 / (2.0 * 3.0_f64.sqrt());

        for side in 0..3 {
            let apex = leaves(&flake, side)[1].1;
            assert!(apex.length() > inradius + 1.0, "apex {:?} is inside", apex);
        }
    }

    #[test]
    fn test_snowflake_boundary_encloses_more_area_each_level() {
        let area = |depth: i64| {
            let points: Vec<Point> = snowflake(depth, Emission::LeavesOnly)
                .into_iter()
                .map(|p| endpoints(&p).0)
                .collect();
            signed_area(&points)
        };

        let areas: Vec<f64> = (0..=4).map(area).collect();
        for pair in areas.windows(2) {
            assert!(pair[1] > pair[0]);
        }
        // limit is 8/5 of the starting triangle
        assert!(areas[4] < areas[0] * 1.6);
    }

    #[test]
    fn test_zero_length_segment_collapses() {
        let p = Point::new(2.0, 2.0);
        let segments: Vec<(Point, Point)> =
            koch_curve(p, p, Depth::new(2).unwrap(), colours(), Emission::LeavesOnly)
                .unwrap()
                .map(|primitive| endpoints(&primitive))
                .collect();

        assert_eq!(segments.len(), 16);
        assert!(segments.iter().all(|&(a, b)| a == p && b == p));
    }

    #[test]
    fn test_zero_size_snowflake_is_accepted() {
        let depth = Depth::new(1).unwrap();
        let flake =
            koch_snowflake(Point::ORIGIN, 0.0, depth, colours(), Emission::Layered).unwrap();
        assert_eq!(flake.into_iter().count(), 15);
    }

    #[test]
    fn test_rejects_bad_geometry() {
        assert!(matches!(
            koch_snowflake(Point::ORIGIN, -1.0, Depth::ZERO, colours(), Emission::Layered),
            Err(FractalError::InvalidSize { .. })
        ));
        assert!(matches!(
            koch_snowflake(Point::ORIGIN, f64::NAN, Depth::ZERO, colours(), Emission::Layered),
            Err(FractalError::NonFiniteInput { what: "snowflake size" })
        ));
        assert!(matches!(
            koch_curve(
                Point::new(f64::NAN, 0.0),
                Point::ORIGIN,
                Depth::ZERO,
                colours(),
                Emission::Layered
            ),
            Err(FractalError::NonFiniteInput { what: "curve start" })
        ));
    }

    #[test]
    fn test_rejects_curve_whose_span_overflows() {
        let result = koch_curve(
            Point::new(-1e308, 0.0),
            Point::new(1e308, 0.0),
            Depth::new(1).unwrap(),
            colours(),
            Emission::LeavesOnly,
        );

        assert!(matches!(result, Err(FractalError::NonFiniteInput { what: "curve extent" })));
    }

    #[test]
    fn test_rejects_snowflake_whose_vertices_overflow() {
        let result = koch_snowflake(
            Point::new(1.7e308, 0.0),
            1e308,
            Depth::ZERO,
            colours(),
            Emission::Layered,
        );

        assert!(matches!(result, Err(FractalError::NonFiniteInput { what: "snowflake extent" })));
    }

    #[test]
    fn test_large_accepted_curve_emits_finite_points() {
        let segments: Vec<(Point, Point)> = koch_curve(
            Point::new(-1e307, 0.0),
            Point::new(1e307, 0.0),
            Depth::new(3).unwrap(),
            colours(),
            Emission::Layered,
        )
        .unwrap()
        .map(|p| endpoints(&p))
        .collect();

        assert_eq!(segments.len(), 1 + 4 + 16 + 64);
        for (from, to) in segments {
            assert!(from.x.is_finite() && from.y.is_finite());
            assert!(to.x.is_finite() && to.y.is_finite());
        }
    }

    #[test]
    fn test_root_segments_are_wider_and_fainter_than_leaves() {
        let primitives: Vec<Primitive> = snowflake(2, Emission::Layered).into_iter().collect();

        match (&primitives[0], &primitives[2]) {
            (
                Primitive::LineSegment { width: root_width, opacity: root_opacity, .. },
                Primitive::LineSegment { width: leaf_width, opacity: leaf_opacity, .. },
            ) => {
                assert!(root_width > leaf_width);
                assert!(root_opacity < leaf_opacity);
            }
            _ => panic!("expected line segments"),
        }
    }
}
