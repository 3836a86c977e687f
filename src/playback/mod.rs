pub mod continuous;
pub mod stepper;

pub use continuous::*;
pub use stepper::*;
