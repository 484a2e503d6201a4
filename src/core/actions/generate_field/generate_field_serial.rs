use crate::core::actions::generate_field::ports::field_algorithm::FieldAlgorithm;
use crate::core::data::grid_point::GridPoint;

/// Evaluates every cell of a `width` x `height` grid in row-major order.
pub fn generate_field_serial<Alg: FieldAlgorithm>(
    width: u32,
    height: u32,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    (0..height)
        .flat_map(|y| (0..width).map(move |x| GridPoint { x, y }))
        .map(|cell| algorithm.compute(cell))
        .collect()
}
