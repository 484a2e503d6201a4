pub mod colour;
pub mod complex;
pub mod complex_rect;
pub mod depth;
pub mod fractal_output;
pub mod fractal_request;
pub mod grid_point;
pub mod interval;
pub mod iteration_field;
pub mod palette;
pub mod point;
pub mod primitive;
