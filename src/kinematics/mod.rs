pub mod builder;
pub mod pose;

pub use builder::*;
pub use pose::*;
