//! Per-level stroke and fill styling shared by the geometric generators.
//!
//! All functions take the remaining recursion `depth` of the level being
//! drawn and the `max_depth` the generation started from, so the root level
//! has `depth == max_depth` and the finest level `depth == 0`.

/// Position of a level between the finest (0.0) and the root (1.0).
/// A generation with `max_depth == 0` only has a finest level.
#[must_use]
pub fn level_scale(depth: u32, max_depth: u32) -> f64 {
    if max_depth == 0 {
        return 0.0;
    }

    (f64::from(depth) / f64::from(max_depth)).min(1.0)
}

#[must_use]
pub fn sierpinski_opacity(depth: u32, max_depth: u32) -> f64 {
    0.9 - level_scale(depth, max_depth) * 0.3
}

/// Root side segments are drawn at 2.0, the finest segments at 1.0.
#[must_use]
pub fn koch_line_width(depth: u32, max_depth: u32) -> f64 {
    1.0 + level_scale(depth, max_depth)
}

/// Coarser Koch levels fade so the finished curve reads on top.
#[must_use]
pub fn koch_opacity(depth: u32, max_depth: u32) -> f64 {
    1.0 - 0.6 * level_scale(depth, max_depth)
}

/// The first Cantor row is drawn at 3.0 and each row below gets thinner.
#[must_use]
pub fn cantor_line_width(depth: u32, max_depth: u32) -> f64 {
    1.0 + 2.0 * level_scale(depth, max_depth)
}

#[must_use]
pub fn cantor_opacity(depth: u32, max_depth: u32) -> f64 {
    0.5 + 0.5 * level_scale(depth, max_depth)
}
