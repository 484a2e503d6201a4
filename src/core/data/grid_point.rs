/// Integer cell coordinate inside a sample grid; `x` is the column, `y` the row.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct GridPoint {
    pub x: u32,
    pub y: u32,
}
