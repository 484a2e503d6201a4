pub mod generate_field_parallel_rayon;
pub mod generate_field_serial;
pub mod ports;
