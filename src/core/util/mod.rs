pub mod geometry;
pub mod sample_to_complex_coords;
