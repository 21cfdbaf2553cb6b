//! A single pattern-to-replacement inflection rule.

use regex::{Regex, RegexBuilder};
use thiserror::Error;

/// Errors raised while registering inflection rules.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PatternError {
    #[error("Invalid inflection pattern '{pattern}': {source}")]
    InvalidRegex {
        pattern: String,
        source: regex::Error,
    },

    #[error("Irregular pair requires non-empty words, got ('{singular}', '{plural}')")]
    EmptyIrregular { singular: String, plural: String },
}

pub type InflectionResult<T> = Result<T, PatternError>;

/// A case-insensitive pattern and the template substituted for its matches.
///
/// Templates use `$N` back-references. A reference directly followed by
/// letters (`$1ices`, `$1$2sis`) means group `N` then literal text.
#[derive(Debug, Clone)]
pub struct Rule {
    regex: Regex,
    replacement: String,
}

impl Rule {
    /// Compile a rule. Fails if `pattern` is not a valid regular expression.
    pub fn new(pattern: &str, replacement: &str) -> InflectionResult<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| PatternError::InvalidRegex {
                pattern: pattern.to_string(),
                source,
            })?;

        Ok(Self {
            regex,
            replacement: brace_group_refs(replacement),
        })
    }

    /// The pattern source as registered.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// The replacement template, with group references in `${N}` form.
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Apply the rule to `word`.
    ///
    /// Returns `None` when the pattern matches nowhere in `word`; otherwise
    /// every match is substituted.
    pub fn apply(&self, word: &str) -> Option<String> {
        if !self.regex.is_match(word) {
            return None;
        }

        Some(
            self.regex
                .replace_all(word, self.replacement.as_str())
                .into_owned(),
        )
    }
}

/// Rewrite `$N` references as `${N}`.
///
/// The regex crate reads `$1ices` as a group named `1ices`.
fn brace_group_refs(template: &str) -> String {
    let mut result = String::with_capacity(template.len() + 4);
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            result.push(c);
            continue;
        }

        match chars.peek() {
            Some('$') => {
                chars.next();
                result.push_str("$$");
            }
            Some(d) if d.is_ascii_digit() => {
                result.push_str("${");
                while let Some(&d) = chars.peek() {
                    if !d.is_ascii_digit() {
                        break;
                    }
                    result.push(d);
                    chars.next();
                }
                result.push('}');
            }
            _ => result.push('$'),
        }
    }

    result
}

/// Escape literal text for use inside a replacement template.
pub(crate) fn escape_replacement(text: &str) -> String {
    text.replace('$', "$$")
}
