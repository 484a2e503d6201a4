use log::debug;

use crate::core::colour::depth_colour_map::DepthColourMap;
use crate::core::data::depth::Depth;
use crate::core::data::point::Point;
use crate::core::data::primitive::Primitive;
use crate::core::errors::FractalError;
use crate::core::fractals::emission::Emission;
use crate::core::fractals::style::sierpinski_opacity;
use crate::core::util::geometry::{ensure_bounded, midpoint};

/// Lazily emits the filled triangles of a Sierpinski gasket in pre-order:
/// each triangle, then the corner sub-triangles of its first, second and
/// third vertex.
#[derive(Debug)]
pub struct SierpinskiTriangles<C> {
    stack: Vec<([Point; 3], u32)>,
    max_depth: u32,
    colours: C,
    emission: Emission,
}

pub fn sierpinski<C: DepthColourMap>(
    triangle: [Point; 3],
    depth: Depth,
    colours: C,
    emission: Emission,
) -> Result<SierpinskiTriangles<C>, FractalError> {
    for vertex in triangle {
        vertex.ensure_finite("triangle vertex")?;
    }
    ensure_bounded(&triangle, "triangle extent")?;

    debug!(
        "sierpinski: depth {} ({:?}, {})",
        depth,
        emission,
        colours.strategy()
    );

    Ok(SierpinskiTriangles {
        stack: vec![(triangle, depth.get())],
        max_depth: depth.get(),
        colours,
        emission,
    })
}

/// Corner triangles formed by joining each vertex to the midpoints of its
/// two adjacent edges.
fn corner_triangles([p0, p1, p2]: [Point; 3]) -> [[Point; 3]; 3] {
    [
        [p0, midpoint(p0, p1), midpoint(p0, p2)],
        [p1, midpoint(p1, p0), midpoint(p1, p2)],
        [p2, midpoint(p2, p0), midpoint(p2, p1)],
    ]
}

impl<C: DepthColourMap> Iterator for SierpinskiTriangles<C> {
    type Item = Primitive;

    fn next(&mut self) -> Option<Primitive> {
        while let Some((triangle, depth)) = self.stack.pop() {
            if depth > 0 {
                for child in corner_triangles(triangle).into_iter().rev() {
                    self.stack.push((child, depth - 1));
                }
            }

            if self.emission.emits(depth) {
                return Some(Primitive::FilledPolygon {
                    vertices: triangle.to_vec(),
                    colour: self.colours.colour(depth, self.max_depth),
                    opacity: sierpinski_opacity(depth, self.max_depth),
                });
            }
        }

        None
    }
}
