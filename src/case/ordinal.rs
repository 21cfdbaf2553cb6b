//! English ordinal suffixes.

use std::num::ParseIntError;

use thiserror::Error;

/// `ordinalize_str` was given text that is not an integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot ordinalize '{input}': {source}")]
pub struct ParseError {
    pub input: String,
    source: ParseIntError,
}

/// `1` → `1st`, `12` → `12th`, `103` → `103rd`.
pub fn ordinalize(number: i64) -> String {
    format!("{}{}", number, ordinal_suffix(number))
}

/// Ordinalize the decimal text `number`.
///
/// The suffix is appended to the text as given, so leading zeros survive
/// (`"007"` → `"007th"`).
pub fn ordinalize_str(number: &str) -> Result<String, ParseError> {
    let value = number.parse::<i64>().map_err(|source| ParseError {
        input: number.to_string(),
        source,
    })?;
    Ok(format!("{}{}", number, ordinal_suffix(value)))
}

fn ordinal_suffix(number: i64) -> &'static str {
    if (11..=13).contains(&(number % 100)) {
        return "th";
    }

    match number % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}
