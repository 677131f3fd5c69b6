mod color;
mod kind;
mod policy;
mod segment;
mod token;

pub use color::*;
pub use kind::*;
pub use policy::*;
pub use segment::*;
pub use token::*;
