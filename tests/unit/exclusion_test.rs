//! Tests for the Exclusion value type
//!
//! Covers normalization of absent inputs, structural equality, hashing and the
//! `group:artifact` text form.

use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};

use depex::core::models::{Exclusion, ParseError};

fn hash_of(e: &Exclusion) -> u64 {
    let mut hasher = DefaultHasher::new();
    e.hash(&mut hasher);
    hasher.finish()
}

// =============================================================================
// Construction Tests
// =============================================================================

#[test]
fn accessors_return_inputs() {
    let e = Exclusion::new("org.springframework", "spring-core");
    assert_eq!(e.group_id(), "org.springframework");
    assert_eq!(e.artifact_id(), "spring-core");
}

#[test]
fn absent_group_becomes_empty() {
    let e = Exclusion::from_optional(None, Some("spring-core"));
    assert_eq!(e.group_id(), "");
    assert_eq!(e.artifact_id(), "spring-core");
    assert_eq!(e, Exclusion::new("", "spring-core"));
}

#[test]
fn absent_artifact_becomes_empty() {
    let e = Exclusion::from_optional(Some("org.springframework"), None);
    assert_eq!(e.artifact_id(), "");
}

#[test]
fn both_absent() {
    let e = Exclusion::from_optional(None, None);
    assert_eq!(e.group_id(), "");
    assert_eq!(e.artifact_id(), "");
    assert_eq!(e, Exclusion::new("", ""));
}

// =============================================================================
// Equality Tests
// =============================================================================

#[test]
fn separately_built_values_are_equal() {
    let a = Exclusion::new("org.springframework", "spring-core");
    let b = Exclusion::new("org.springframework", "spring-core");
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_eq!(a.hash_code(), b.hash_code());
}

#[test]
fn different_artifact_not_equal() {
    let core = Exclusion::new("org.springframework", "spring-core");
    let context = Exclusion::new("org.springframework", "spring-context");
    assert_ne!(core, context);
}

#[test]
fn distinct_pairs() {
    let ab = Exclusion::new("a", "b");
    assert_ne!(ab, Exclusion::new("a", "c"));
    assert_ne!(ab, Exclusion::new("b", "b"));
}

#[test]
fn comparison_is_case_sensitive() {
    assert_ne!(Exclusion::new("Org", "lib"), Exclusion::new("org", "lib"));
}

#[test]
fn not_equal_to_absent() {
    let e = Exclusion::new("a", "b");
    assert_ne!(Some(&e), None);
}

#[test]
fn usable_as_set_member_and_map_key() {
    let mut set = HashSet::new();
    set.insert(Exclusion::new("g", "a"));
    set.insert(Exclusion::new("g", "a"));
    set.insert(Exclusion::from_optional(None, Some("a")));
    assert_eq!(set.len(), 2);
    assert!(set.contains(&Exclusion::new("", "a")));

    let mut map = HashMap::new();
    map.insert(Exclusion::new("g", "a"), 1);
    assert_eq!(map.get(&Exclusion::new("g", "a")), Some(&1));
}

#[test]
fn shared_across_threads() {
    let e = std::sync::Arc::new(Exclusion::new("g", "a"));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let e = std::sync::Arc::clone(&e);
            std::thread::spawn(move || e.to_string())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "g:a");
    }
}

// =============================================================================
// Hash Code Tests
// =============================================================================

#[test]
fn hash_code_mixes_artifact_first() {
    // 31 * (31 + h("b")) + h("a") differs from the swapped order
    assert_eq!(Exclusion::new("a", "b").hash_code(), 4096);
    assert_eq!(Exclusion::new("b", "a").hash_code(), 4066);
}

#[test]
fn hash_code_spring_core() {
    let e = Exclusion::new("org.springframework", "spring-core");
    assert_eq!(e.hash_code(), 319_361_993);
}

// =============================================================================
// Text Form Tests
// =============================================================================

#[test]
fn parse_coordinate() {
    let e: Exclusion = "org.springframework:spring-core".parse().unwrap();
    assert_eq!(e, Exclusion::new("org.springframework", "spring-core"));
}

#[test]
fn parse_trims_whitespace() {
    let e: Exclusion = "  g:a \n".parse().unwrap();
    assert_eq!(e, Exclusion::new("g", "a"));
}

#[test]
fn parse_empty_group_segment() {
    let e: Exclusion = ":spring-core".parse().unwrap();
    assert_eq!(e, Exclusion::from_optional(None, Some("spring-core")));
    assert_eq!(e.to_string(), ":spring-core");
}

#[test]
fn parse_rejects_bad_input() {
    assert_eq!("".parse::<Exclusion>(), Err(ParseError::Empty));
    assert!(matches!("nocolon".parse::<Exclusion>(), Err(ParseError::MissingSeparator(_))));
    assert!(matches!("a:b:c".parse::<Exclusion>(), Err(ParseError::TooManySegments(_))));
}

#[test]
fn parse_error_messages() {
    let err = "a:b:c".parse::<Exclusion>().unwrap_err();
    assert_eq!(err.to_string(), "too many ':' separated segments in coordinate: a:b:c");
}

// =============================================================================
// Serde Tests
// =============================================================================

#[test]
fn serializes_both_fields() {
    let json = serde_json::to_string(&Exclusion::new("g", "a")).unwrap();
    assert_eq!(json, r#"{"group_id":"g","artifact_id":"a"}"#);
}

#[test]
fn deserialize_normalizes_missing_and_null() {
    let e: Exclusion = serde_json::from_str(r#"{"artifact_id":"a"}"#).unwrap();
    assert_eq!(e, Exclusion::new("", "a"));

    let e: Exclusion = serde_json::from_str(r#"{"group_id":null,"artifact_id":null}"#).unwrap();
    assert_eq!(e, Exclusion::new("", ""));
}

#[test]
fn deserialize_short_field_names() {
    let e: Exclusion = toml::from_str("group = \"g\"\nartifact = \"a\"\n").unwrap();
    assert_eq!(e, Exclusion::new("g", "a"));
}
