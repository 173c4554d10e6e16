//! Interface-conformance matching.
//!
//! An object construction conforms to a capability alternative only if the
//! constructed class names that capability in its own `implements` clause.
//! There is no structural check and no walk up the supertype chain.

use uty_ir::ClassDecl;

use crate::UnionRegistry;

use super::MatchOutcome;

/// Find the first capability alternative `class` explicitly implements.
///
/// `class` is `None` when the constructed type is not declared in this
/// unit; that is skipped, not reported.
pub fn first_match(
    class: Option<&ClassDecl>,
    alternatives: &[String],
    registry: &UnionRegistry,
) -> MatchOutcome {
    if alternatives.is_empty() {
        return MatchOutcome::Skipped;
    }
    let Some(class) = class else {
        return MatchOutcome::Skipped;
    };
    alternatives
        .iter()
        .position(|alternative| {
            // An object instance never satisfies a function shape.
            registry.resolve_function_shape(alternative).is_none()
                && class.declares_implements(alternative)
        })
        .map_or(MatchOutcome::NoMatch, MatchOutcome::Matched)
}
