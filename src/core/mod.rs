pub mod actions;
pub mod colour;
pub mod data;
pub mod errors;
pub mod fractals;
pub mod util;
