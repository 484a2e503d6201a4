use std::error::Error;

use crate::core::data::grid_point::GridPoint;

/// Per-cell computation over a sample grid. Cells are independent, so
/// drivers may evaluate them in any order.
pub trait FieldAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, cell: GridPoint) -> Result<Self::Success, Self::Failure>;
}
