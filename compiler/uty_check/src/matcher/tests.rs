use super::MatchOutcome;

#[test]
fn test_only_no_match_is_a_violation() {
    assert!(MatchOutcome::NoMatch.is_violation());
    assert!(!MatchOutcome::Matched(0).is_violation());
    assert!(!MatchOutcome::Skipped.is_violation());
}
