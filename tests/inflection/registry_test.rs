//! Integration tests for building and extending registries.

use inflect::inflection::{PatternError, Rule};
use inflect::Inflections;

#[test]
fn test_last_registered_rule_wins() {
    let mut inflections = Inflections::new();
    inflections
        .add_plural_rule("(octop)us$", "$1odes")
        .unwrap()
        .add_plural_rule("(octop)us$", "$1i")
        .unwrap();

    assert_eq!(inflections.pluralize("octopus"), "octopi");
}

#[test]
fn test_earlier_rule_applies_when_later_does_not_match() {
    let mut inflections = Inflections::new();
    inflections.add_singular_rule("s$", "").unwrap();
    inflections.add_singular_rule("(quiz)zes$", "$1").unwrap();

    assert_eq!(inflections.singularize("quizzes"), "quiz");
    assert_eq!(inflections.singularize("dogs"), "dog");
}

#[test]
fn test_extending_english_overrides_defaults() {
    let mut inflections = Inflections::english();
    assert_eq!(inflections.pluralize("octopus"), "octopi");

    inflections.add_irregular("octopus", "octopuses").unwrap();
    assert_eq!(inflections.pluralize("octopus"), "octopuses");
    assert_eq!(inflections.singularize("octopuses"), "octopus");
}

#[test]
fn test_uncountable_overrides_irregular() {
    let mut inflections = Inflections::english();
    inflections.add_uncountable("People");

    assert_eq!(inflections.singularize("people"), "people");
    assert_eq!(inflections.pluralize("person"), "people");
}

#[test]
fn test_unmatched_word_falls_back() {
    let mut inflections = Inflections::new();
    inflections.add_plural_rule("(quiz)$", "$1zes").unwrap();
    inflections.add_singular_rule("(quiz)zes$", "$1").unwrap();

    assert_eq!(inflections.pluralize("table"), "table");
    assert_eq!(inflections.singularize("tables"), "tables");
}

#[test]
fn test_apply_rules_with_explicit_list() {
    let inflections = Inflections::english();
    let rules = [Rule::new("$", "-ish").unwrap()];

    assert_eq!(inflections.apply_rules(&rules, "green"), "green-ish");
    assert_eq!(inflections.apply_rules(&rules, "fish"), "fish");
}

#[test]
fn test_registration_errors_surface_immediately() {
    let mut inflections = Inflections::new();

    let err = inflections.add_plural_rule("[a-", "x").unwrap_err();
    assert!(matches!(err, PatternError::InvalidRegex { .. }));

    let err = inflections.add_irregular("goose", "").unwrap_err();
    assert_eq!(
        err,
        PatternError::EmptyIrregular {
            singular: "goose".to_string(),
            plural: String::new(),
        }
    );
}

#[test]
fn test_registry_is_shareable_across_threads() {
    let inflections = std::sync::Arc::new(Inflections::english());

    let handles: Vec<_> = ["cat", "box", "person", "sheep"]
        .into_iter()
        .map(|word| {
            let inflections = inflections.clone();
            std::thread::spawn(move || inflections.pluralize(word))
        })
        .collect();

    let plurals: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(plurals, vec!["cats", "boxes", "people", "sheep"]);
}
