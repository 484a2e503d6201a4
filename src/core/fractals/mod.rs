pub mod cantor;
pub mod emission;
pub mod fractal_kinds;
pub mod koch;
pub mod mandelbrot;
pub mod sierpinski;
pub mod style;
