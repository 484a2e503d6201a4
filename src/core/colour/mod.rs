pub mod depth_colour_map;
pub mod factory;
pub mod gradient;
pub mod kinds;
pub mod maps;
pub mod schemes;
