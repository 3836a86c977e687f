pub mod curve;
pub mod interpolator;

pub use curve::*;
pub use interpolator::*;
