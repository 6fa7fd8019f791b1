//! Integration tests for the resolution failure policy.

use hieraddr::{AddressTemplate, MapContext, ResolveError, Token, parse_template, suggest_names};

// =============================================================================
// Malformed templates
// =============================================================================

#[test]
fn bare_literal_without_equals_is_fatal() {
    let err = parse_template("profile=default/oops")
        .resolve(&MapContext::new(), &[])
        .unwrap_err();
    assert!(matches!(
        err,
        ResolveError::MalformedTemplate { ref segment } if segment == "oops"
    ));
}

#[test]
fn malformed_template_error_names_the_segment() {
    let template = AddressTemplate::new(vec![Token::bare("not-a-pair")]);
    let err = template.resolve(&MapContext::new(), &[]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "malformed template segment 'not-a-pair': expected 'key=value'"
    );
}

#[test]
fn unclosed_brace_is_treated_as_literal() {
    // "{name" neither parses as a reference nor as a pair.
    let err = parse_template("{name")
        .resolve(&MapContext::new(), &[])
        .unwrap_err();
    assert!(matches!(err, ResolveError::MalformedTemplate { .. }));
}

// =============================================================================
// Mandatory value-expression references
// =============================================================================

#[test]
fn unresolvable_value_reference_aborts() {
    let err = parse_template("subsystem={missing}")
        .resolve(&MapContext::new(), &[])
        .unwrap_err();
    assert!(matches!(
        err,
        ResolveError::UnresolvableReference { ref name, .. } if name == "missing"
    ));
}

#[test]
fn unresolvable_key_reference_aborts() {
    let err = parse_template("{missing}=default")
        .resolve(&MapContext::new(), &[])
        .unwrap_err();
    assert!(matches!(
        err,
        ResolveError::UnresolvableReference { ref name, .. } if name == "missing"
    ));
}

#[test]
fn exhausted_value_reference_aborts() {
    // One candidate, two occurrences: the second is an error, not a repeat.
    let ctx = MapContext::new().with_value("n", "one");
    let err = parse_template("a={n}/b={n}").resolve(&ctx, &[]).unwrap_err();
    assert!(matches!(
        err,
        ResolveError::UnresolvableReference { ref name, .. } if name == "n"
    ));
}

#[test]
fn fatal_error_returns_no_partial_address() {
    // The first token would resolve; the result must still be an error.
    let ctx = MapContext::new().with_value("name", "datasources");
    let result = parse_template("subsystem={name}/server={missing}").resolve(&ctx, &[]);
    assert!(result.is_err());
}

#[test]
fn suppression_and_hard_failure_stay_distinct() {
    let ctx = MapContext::new();
    // Bare token expression: suppressed, call succeeds.
    assert!(parse_template("{missing}").resolve(&ctx, &[]).is_ok());
    // Value expression: mandatory, call fails.
    assert!(parse_template("subsystem={missing}").resolve(&ctx, &[]).is_err());
}

// =============================================================================
// Suggestions
// =============================================================================

#[test]
fn near_miss_reference_suggests_known_names() {
    let ctx = MapContext::new().with_value("profile", "default");
    let err = parse_template("a={profil}").resolve(&ctx, &[]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot resolve reference '{profil}', did you mean: profile?"
    );
}

#[test]
fn distant_names_are_not_suggested() {
    let ctx = MapContext::new().with_value("server-group", "main");
    let err = parse_template("a={profile}").resolve(&ctx, &[]).unwrap_err();
    assert_eq!(err.to_string(), "cannot resolve reference '{profile}'");
}

#[test]
fn suggest_names_ranks_by_distance_and_caps_at_three() {
    let candidates: Vec<String> = ["profiles", "profil", "profole", "profille", "unrelated"]
        .into_iter()
        .map(String::from)
        .collect();
    let suggestions = suggest_names("profile", &candidates);
    assert_eq!(suggestions.len(), 3);
    assert_eq!(suggestions[0], "profiles");
}

#[test]
fn short_names_only_match_at_distance_one() {
    let candidates = vec!["abc".to_string(), "ayz".to_string()];
    assert_eq!(suggest_names("abx", &candidates), vec!["abc".to_string()]);
}
