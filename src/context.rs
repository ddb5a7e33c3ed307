use crate::behavior::exec_step;
use crate::logger::Logger;
use crate::nav::Navigator;
use crate::op::Op;
use crate::sample::sample_tree;
use std::io::{self, Write};
use vtree::Tree;

/// Everything a pipeline runs against: where output goes, and the tree that
/// questions get asked about.
pub struct Context<'a> {
    pub log: &'a mut Logger,
    pub tree: Tree,
}

impl<'a> Context<'a> {
    /// Start out on the sample tree.
    pub fn new(log: &'a mut Logger) -> Self {
        Self::with_tree(log, sample_tree())
    }

    pub fn with_tree(log: &'a mut Logger, tree: Tree) -> Self {
        Self {
            log: log,
            tree: tree,
        }
    }

    pub fn nav(&self) -> Navigator<'_> {
        Navigator::from(&self.tree)
    }

    pub fn apply(&mut self, op: &Op) -> io::Result<()> {
        write!(self.log.opheader(), "--- {:?} ---\n", op.to_code())?;
        exec_step(self, op)
    }

    pub fn parse_apply<T>(&mut self, args: impl IntoIterator<Item = T>) -> io::Result<()>
    where
        T: AsRef<str>,
    {
        let pipeline = crate::op::parse_pipeline(args)?;
        for op in pipeline {
            self.apply(&op)?
        }
        Ok(())
    }
}
