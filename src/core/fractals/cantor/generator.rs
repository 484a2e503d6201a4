use log::debug;

use crate::core::colour::depth_colour_map::DepthColourMap;
use crate::core::data::depth::Depth;
use crate::core::data::interval::{Interval, ensure_disjoint};
use crate::core::data::point::Point;
use crate::core::data::primitive::Primitive;
use crate::core::errors::{FractalError, ensure_finite};
use crate::core::fractals::emission::Emission;
use crate::core::fractals::style::{cantor_line_width, cantor_opacity};

/// Lazily emits a Cantor set one row per recursion level.
///
/// Each row holds the current interval list at its own height; the next
/// row sits `row_spacing` below it and replaces every interval by its outer
/// thirds.
#[derive(Debug)]
pub struct CantorRows<C> {
    row: Vec<Interval>,
    next_index: usize,
    depth: u32,
    max_depth: u32,
    y: f64,
    row_spacing: f64,
    colours: C,
    emission: Emission,
}

pub fn cantor<C: DepthColourMap>(
    intervals: Vec<Interval>,
    y: f64,
    row_spacing: f64,
    depth: Depth,
    colours: C,
    emission: Emission,
) -> Result<CantorRows<C>, FractalError> {
    ensure_finite(y, "row height")?;
    ensure_finite(row_spacing, "row spacing")?;
    ensure_finite(y - row_spacing * f64::from(depth.get()), "lowest row")?;
    ensure_disjoint(&intervals)?;

    if row_spacing == 0.0 {
        return Err(FractalError::InvalidSize {
            what: "row spacing",
            value: row_spacing,
        });
    }

    debug!(
        "cantor: {} interval(s), depth {} ({:?})",
        intervals.len(),
        depth,
        emission
    );

    Ok(CantorRows {
        row: intervals,
        next_index: 0,
        depth: depth.get(),
        max_depth: depth.get(),
        y,
        row_spacing,
        colours,
        emission,
    })
}

impl<C> CantorRows<C> {
    fn descend(&mut self) {
        self.row = self.row.iter().flat_map(Interval::split_thirds).collect();
        self.next_index = 0;
        self.depth -= 1;
        self.y -= self.row_spacing;
    }
}

impl<C: DepthColourMap> Iterator for CantorRows<C> {
    type Item = Primitive;

    fn next(&mut self) -> Option<Primitive> {
        loop {
            if self.emission.emits(self.depth) {
                if let Some(interval) = self.row.get(self.next_index) {
                    self.next_index += 1;

                    return Some(Primitive::LineSegment {
                        from: Point::new(interval.start(), self.y),
                        to: Point::new(interval.end(), self.y),
                        colour: self.colours.colour(self.depth, self.max_depth),
                        width: cantor_line_width(self.depth, self.max_depth),
                        opacity: cantor_opacity(self.depth, self.max_depth),
                    });
                }
            }

            if self.depth == 0 || self.row.is_empty() {
                return None;
            }

            self.descend();
        }
    }
}
