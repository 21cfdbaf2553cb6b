//! Identifier case conversion.
//!
//! Independent of the inflection rules. Every function here is total: empty
//! input yields empty output.

pub mod ordinal;
pub mod replace;

pub use ordinal::{ordinalize, ordinalize_str, ParseError};
pub use replace::{replace, Comparison};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// An acronym run followed by a capitalized word (`HTMLParser`).
static ACRONYM_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap());

/// A lowercase letter or digit followed by a capital (`activeRecord`).
static CASE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z\d])([A-Z])").unwrap());

static SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[-\s]").unwrap());

/// The first character and every character after an underscore.
static SEGMENT_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:^|_)(.)").unwrap());

static WORD_START: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b([a-z])").unwrap());

/// Lowercase the first character, leave the rest as is.
pub fn to_lower_first(s: &str) -> String {
    uncapitalize(s)
}

/// Uppercase the first character and lowercase the rest.
///
/// ```
/// assert_eq!(inflect::capitalize("hELLO"), "Hello");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Capitalize `s` only when it is longer than one character and entirely uppercase.
pub fn capitalize_if_all_upper(s: &str) -> String {
    if s.chars().count() > 1 && s == s.to_uppercase() {
        capitalize(s)
    } else {
        s.to_string()
    }
}

/// Lowercase the first character, leave the rest as is.
pub fn uncapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// `ActiveRecord` → `active_record`, `HTMLParser` → `html_parser`.
///
/// Hyphens and whitespace also become underscores.
pub fn underscore(s: &str) -> String {
    let s = ACRONYM_BOUNDARY.replace_all(s, "${1}_${2}");
    let s = CASE_BOUNDARY.replace_all(&s, "${1}_${2}");
    SEPARATOR.replace_all(&s, "_").to_lowercase()
}

/// `active_record` → `ActiveRecord`.
pub fn pascalize(s: &str) -> String {
    SEGMENT_START
        .replace_all(s, |caps: &Captures| caps[1].to_uppercase())
        .into_owned()
}

/// `active_record` → `activeRecord`.
pub fn camelize(s: &str) -> String {
    uncapitalize(&pascalize(s))
}

/// `employee_salary` → `Employee salary`.
pub fn humanize(s: &str) -> String {
    capitalize(&s.replace('_', " "))
}

/// `ActiveRecord` → `Active Record`, `x-men: the last stand` → `X Men: The Last Stand`.
pub fn titleize(s: &str) -> String {
    let humanized = humanize(&underscore(s));
    WORD_START
        .replace_all(&humanized, |caps: &Captures| caps[1].to_uppercase())
        .into_owned()
}

/// `active_record` → `active-record`.
pub fn dasherize(s: &str) -> String {
    s.replace('_', "-")
}
