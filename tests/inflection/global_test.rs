//! Integration test for installing the process-wide registry.
//!
//! Kept in its own test binary: the registry can only be installed once per
//! process.

use inflect::inflection::{self, InitError};
use inflect::{naming, pluralize, singularize, Inflections};

#[test]
fn test_init_installs_custom_registry_once() {
    let _ = env_logger::builder().is_test(true).try_init();
    assert!(!inflection::is_initialized());

    let mut custom = Inflections::english();
    custom.add_irregular("cactus", "cacti").unwrap();
    custom.add_uncountable("metadata");

    let installed = inflection::init(custom).unwrap();
    assert!(inflection::is_initialized());
    assert_eq!(installed.pluralize("cactus"), "cacti");

    // Free functions now read the installed registry.
    assert_eq!(pluralize("cactus"), "cacti");
    assert_eq!(singularize("cacti"), "cactus");
    assert_eq!(pluralize("metadata"), "metadata");
    assert_eq!(pluralize("person"), "people");
    assert_eq!(naming::collection_name("Cactus"), "cacti");

    let err = inflection::init(Inflections::new()).unwrap_err();
    let InitError::AlreadyInitialized(rejected) = err;
    assert!(rejected.plurals().is_empty());

    // The first registry stays in place.
    assert_eq!(pluralize("cactus"), "cacti");
}
