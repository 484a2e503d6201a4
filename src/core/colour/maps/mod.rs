pub mod continuous_gradient;
pub mod discrete_repeat;
