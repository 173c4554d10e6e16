use pretty_assertions::assert_eq;

use super::*;

fn on_tap_registry() -> (UnionRegistry, Vec<String>) {
    let mut registry = UnionRegistry::new();
    registry.register_function_shape("VoidCallback", Signature::default());
    registry.register_function_shape("OnTapCtx", Signature::new(["Ctx"]));
    registry.register_function_shape("OnTapCtxData", Signature::new(["Ctx", WILDCARD]));
    let alternatives = ["VoidCallback", "OnTapCtx", "OnTapCtxData", "IOnTap"]
        .iter()
        .map(|s| (*s).to_string())
        .collect();
    (registry, alternatives)
}

#[test]
fn test_first_match_by_arity() {
    let (registry, alts) = on_tap_registry();
    assert_eq!(
        first_match(&Signature::default(), &alts, &registry),
        MatchOutcome::Matched(0)
    );
    assert_eq!(
        first_match(&Signature::new(["Ctx"]), &alts, &registry),
        MatchOutcome::Matched(1)
    );
    assert_eq!(
        first_match(&Signature::new(["Ctx", "Payload"]), &alts, &registry),
        MatchOutcome::Matched(2)
    );
}

#[test]
fn test_wrong_type_is_no_match() {
    let (registry, alts) = on_tap_registry();
    let outcome = first_match(&Signature::new(["int"]), &alts, &registry);
    assert_eq!(outcome, MatchOutcome::NoMatch);
    assert!(outcome.is_violation());
}

#[test]
fn test_empty_alternatives_are_skipped() {
    let (registry, _) = on_tap_registry();
    assert_eq!(
        first_match(&Signature::new(["int"]), &[], &registry),
        MatchOutcome::Skipped
    );
}

#[test]
fn test_capability_alternative_never_matches_literal() {
    let registry = UnionRegistry::new();
    let alts = vec!["IOnTap".to_string()];
    assert_eq!(
        first_match(&Signature::default(), &alts, &registry),
        MatchOutcome::NoMatch
    );
}

#[test]
fn test_wildcard_only_on_expected_side() {
    let registry = UnionRegistry::new();
    assert!(slot_compatible(WILDCARD, "Ctx", &registry));
    assert!(!slot_compatible("Ctx", WILDCARD, &registry));
}

#[test]
fn test_single_param_alias_unwraps_once() {
    let mut registry = UnionRegistry::new();
    registry.register_function_shape("CtxAlias", Signature::new(["Ctx"]));
    registry.register_function_shape("Outer", Signature::new(["CtxAlias"]));

    assert!(slot_compatible("CtxAlias", "Ctx", &registry));
    // Two levels would be needed here.
    assert!(!slot_compatible("Outer", "Ctx", &registry));
    assert!(slot_compatible("Outer", "CtxAlias", &registry));
}

#[test]
fn test_multi_param_alias_does_not_unwrap() {
    let mut registry = UnionRegistry::new();
    registry.register_function_shape("Pair", Signature::new(["Ctx", "Ctx"]));
    assert!(!slot_compatible("Pair", "Ctx", &registry));
}

#[test]
fn test_params_compatible_requires_equal_arity() {
    let registry = UnionRegistry::new();
    assert!(!params_compatible(
        &Signature::new([WILDCARD]),
        &Signature::new(["a", "b"]),
        &registry
    ));
    assert!(params_compatible(
        &Signature::new([WILDCARD, "b"]),
        &Signature::new(["a", "b"]),
        &registry
    ));
}
