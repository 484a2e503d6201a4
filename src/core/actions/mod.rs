pub mod cancellation;
pub mod colourise_field;
pub mod generate_field;
pub mod generate_fractal;
