//! Behavior on trees, split up by what it's for.

pub mod entries;
pub mod json;
pub mod resolve;
pub mod walk;

pub use entries::*;
pub use resolve::*;
pub use walk::*;
