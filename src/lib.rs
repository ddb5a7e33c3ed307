//! Recursive search and size analysis over in-memory directory trees.
//!
//! The trees themselves (and path handling) live in the `vtree` crate. This
//! crate asks questions of them, through [`nav::Navigator`], and wraps that
//! up in a small pipeline-style command line.

pub mod behavior;
pub mod cli;
pub mod context;
pub mod doc;
pub mod logger;
pub mod nav;
pub mod op;
pub mod report;
pub mod sample;
pub mod search;
pub mod size;
pub mod stats;
