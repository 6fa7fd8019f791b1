//! Integration tests for positional wildcard filling.

use hieraddr::{MapContext, ResolveError, address, parse_template};

// =============================================================================
// Substitution
// =============================================================================

#[test]
fn wildcard_value_takes_next_replacement() {
    let addr = parse_template("subsystem=*")
        .resolve(&MapContext::new(), &["datasources"])
        .unwrap();
    assert_eq!(addr, address![("subsystem", "datasources")]);
}

#[test]
fn cursor_is_shared_across_keys() {
    let addr = parse_template("server-group=*/server=*")
        .resolve(&MapContext::new(), &["main", "one"])
        .unwrap();
    assert_eq!(addr, address![("server-group", "main"), ("server", "one")]);
}

#[test]
fn non_wildcard_values_do_not_consume_replacements() {
    let addr = parse_template("profile=default/data-source=*")
        .resolve(&MapContext::new(), &["accounts"])
        .unwrap();
    assert_eq!(addr, address![("profile", "default"), ("data-source", "accounts")]);
}

#[test]
fn resolved_reference_value_may_be_a_wildcard() {
    // The marker is checked on the resolved value, not the raw expression.
    let ctx = MapContext::new().with_value("name", "*");
    let addr = parse_template("data-source={name}")
        .resolve(&ctx, &["accounts"])
        .unwrap();
    assert_eq!(addr, address![("data-source", "accounts")]);
}

#[test]
fn star_inside_longer_value_is_not_a_marker() {
    let addr = parse_template("data-source=a*b")
        .resolve(&MapContext::new(), &["accounts"])
        .unwrap();
    assert_eq!(addr, address![("data-source", "a*b")]);
}

// =============================================================================
// Underrun policy
// =============================================================================

#[test]
fn underrun_of_a_nonempty_list_is_fatal() {
    let err = parse_template("server-group=*/server=*")
        .resolve(&MapContext::new(), &["main"])
        .unwrap_err();
    assert!(matches!(
        err,
        ResolveError::WildcardUnderrun { ref key } if key == "server"
    ));
}

#[test]
fn underrun_error_names_the_key() {
    let err = parse_template("server-group=*/server=*")
        .resolve(&MapContext::new(), &["main"])
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "wildcard underrun: no replacement left for 'server=*'"
    );
}

#[test]
fn empty_wildcard_list_keeps_literal_star() {
    let addr = parse_template("data-source=*")
        .resolve(&MapContext::new(), &[])
        .unwrap();
    assert_eq!(addr, address![("data-source", "*")]);
}
