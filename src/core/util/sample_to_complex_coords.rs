use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::grid_point::GridPoint;

/// Maps a grid cell to the complex value it samples.
///
/// Cells form a half-open lattice anchored at the minimum corner: column `x`
/// samples `re_min + width / columns * x`, row `y` samples
/// `im_min + height / rows * y`. Callers keep `cell` inside the grid.
/// Dividing first keeps the product within the bounds.
#[must_use]
pub fn sample_to_complex_coords(
    cell: GridPoint,
    columns: u32,
    rows: u32,
    bounds: ComplexRect,
) -> Complex {
    let real = bounds.re_min() + bounds.width() / f64::from(columns) * f64::from(cell.x);
    let imag = bounds.im_min() + bounds.height() / f64::from(rows) * f64::from(cell.y);

    Complex { real, imag }
}
