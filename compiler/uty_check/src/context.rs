//! Run-scoped checker state.
//!
//! One [`CheckContext`] is owned by one traversal. Nothing in it outlives
//! the run, so independent runs never see each other's unions or findings.

use rustc_hash::FxHashSet;
use uty_ir::Span;

use crate::{Reporter, UnionRegistry};

/// Mutable state threaded through a single checker run.
#[derive(Debug)]
pub struct CheckContext<'s> {
    pub registry: UnionRegistry,
    /// Start offsets of expressions already checked against a union.
    checked: FxHashSet<u32>,
    pub reporter: Reporter<'s>,
}

impl<'s> CheckContext<'s> {
    pub fn new(reporter: Reporter<'s>) -> Self {
        CheckContext {
            registry: UnionRegistry::new(),
            checked: FxHashSet::default(),
            reporter,
        }
    }

    /// Mark the expression at `span` as checked.
    ///
    /// Returns `false` if it had already been checked.
    ///
    /// The key is the offset alone, not the union: a site marked here is
    /// skipped for every union afterwards.
    pub fn mark_checked(&mut self, span: Span) -> bool {
        self.checked.insert(span.start)
    }

    pub fn is_checked(&self, span: Span) -> bool {
        self.checked.contains(&span.start)
    }

    /// Number of binding sites checked so far.
    pub fn checked_count(&self) -> usize {
        self.checked.len()
    }
}
