pub mod conversion;
pub mod edge;
pub mod model;
pub mod node;
pub mod validator;

pub use conversion::*;
pub use edge::*;
pub use model::*;
pub use node::*;
