//! The core types and nothing else.

pub mod error;
pub mod name;
pub mod node;
pub mod path;

pub use error::*;
pub use name::*;
pub use node::*;
pub use path::*;
