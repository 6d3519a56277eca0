pub mod class_value;
pub mod error;
pub mod ordered;
pub mod result;
pub mod visitor;

pub use class_value::*;
pub use error::*;
pub use ordered::*;
pub use result::*;
pub use visitor::*;
