//! Structural matchers.
//!
//! Both matchers scan a union's alternatives in declared order and stop at
//! the first one that fits. Neither touches the run log; the traversal turns
//! a [`MatchOutcome::NoMatch`] into a violation.

pub mod conformance;
pub mod signature;

/// Outcome of matching one supplied value against a union.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MatchOutcome {
    /// Nothing to decide: the union allows nothing, or the value's
    /// declaration could not be found.
    Skipped,
    /// Matched the alternative at this index.
    Matched(usize),
    /// No alternative matched.
    NoMatch,
}

impl MatchOutcome {
    pub fn is_violation(self) -> bool {
        self == MatchOutcome::NoMatch
    }
}

#[cfg(test)]
mod tests;
