//! Rule-driven pluralization and singularization.
//!
//! Rules live in an [`Inflections`] registry. The free functions here read a
//! process-wide registry seeded with English rules; build your own
//! [`Inflections`] and [`init`] it at startup to extend them.
//!
//! ```
//! use inflect::inflection::{pluralize, singularize};
//!
//! assert_eq!(pluralize("quiz"), "quizzes");
//! assert_eq!(singularize("mice"), "mouse");
//! assert_eq!(pluralize("fish"), "fish");
//! ```

pub mod defaults;
pub mod global;
pub mod registry;
pub mod rule;

pub use global::{get, init, is_initialized, InitError};
pub use registry::Inflections;
pub use rule::{InflectionResult, PatternError, Rule};

/// Pluralize `word` using the process-wide registry.
pub fn pluralize(word: &str) -> String {
    global::get().pluralize(word)
}

/// Singularize `word` using the process-wide registry.
pub fn singularize(word: &str) -> String {
    global::get().singularize(word)
}
