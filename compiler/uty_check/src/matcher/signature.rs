//! Function-signature matching.
//!
//! A function literal matches a function-shape alternative when both have
//! the same arity and every position is compatible. Alternatives that are
//! not function shapes can never match a literal.

use crate::{Signature, UnionRegistry, WILDCARD};

use super::MatchOutcome;

/// Find the first alternative whose shape `actual` satisfies.
pub fn first_match(
    actual: &Signature,
    alternatives: &[String],
    registry: &UnionRegistry,
) -> MatchOutcome {
    if alternatives.is_empty() {
        return MatchOutcome::Skipped;
    }
    alternatives
        .iter()
        .position(|alternative| {
            registry
                .resolve_function_shape(alternative)
                .is_some_and(|expected| params_compatible(expected, actual, registry))
        })
        .map_or(MatchOutcome::NoMatch, MatchOutcome::Matched)
}

/// Equal arity and pairwise compatible positions.
pub fn params_compatible(
    expected: &Signature,
    actual: &Signature,
    registry: &UnionRegistry,
) -> bool {
    expected.arity() == actual.arity()
        && expected
            .params()
            .iter()
            .zip(actual.params())
            .all(|(e, a)| slot_compatible(e, a, registry))
}

/// Compatibility of one parameter position.
///
/// `expected` accepts `actual` when the names are identical, when
/// `expected` is the wildcard, or when `expected` is a function-shape alias
/// with exactly one parameter whose type is `actual`. The alias is unwrapped
/// one level only.
pub fn slot_compatible(expected: &str, actual: &str, registry: &UnionRegistry) -> bool {
    if expected == actual || expected == WILDCARD {
        return true;
    }
    registry
        .resolve_function_shape(expected)
        .and_then(Signature::single_param)
        .is_some_and(|inner| inner == actual)
}

#[cfg(test)]
mod tests;
