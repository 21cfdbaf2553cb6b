//! Ordered rule lists and the last-registered-wins matching algorithm.

use std::collections::HashSet;

use super::defaults;
use super::rule::{escape_replacement, InflectionResult, PatternError, Rule};

/// A set of inflection rules: plural rules, singular rules and uncountable words.
///
/// Rules are consulted from the most recently registered to the first, so
/// exceptions registered after general suffix rules take precedence over them.
/// Uncountable words are checked before any rule.
///
/// An `Inflections` value is an owned handle; extend it freely, then share it
/// read-only (see [`crate::inflection::init`]).
#[derive(Debug, Clone, Default)]
pub struct Inflections {
    plurals: Vec<Rule>,
    singulars: Vec<Rule>,
    uncountables: HashSet<String>,
}

impl Inflections {
    /// An empty registry. Every word is returned unchanged until rules are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry seeded with the English rule table.
    pub fn english() -> Self {
        let mut inflections = Self::new();
        defaults::seed(&mut inflections).expect("built-in English inflection rules are valid");

        log::debug!(
            "Seeded English inflections: {} plural rules, {} singular rules, {} uncountables",
            inflections.plurals.len(),
            inflections.singulars.len(),
            inflections.uncountables.len()
        );
        inflections
    }

    /// Append a plural rule.
    pub fn add_plural_rule(
        &mut self,
        pattern: &str,
        replacement: &str,
    ) -> InflectionResult<&mut Self> {
        self.plurals.push(Rule::new(pattern, replacement)?);
        Ok(self)
    }

    /// Append a singular rule.
    pub fn add_singular_rule(
        &mut self,
        pattern: &str,
        replacement: &str,
    ) -> InflectionResult<&mut Self> {
        self.singulars.push(Rule::new(pattern, replacement)?);
        Ok(self)
    }

    /// Mark a word as uncountable. Matching is case-insensitive.
    pub fn add_uncountable(&mut self, word: &str) -> &mut Self {
        self.uncountables.insert(word.to_lowercase());
        self
    }

    /// Register an irregular singular/plural pair.
    ///
    /// Expands into one plural rule and one singular rule. Each captures the
    /// first letter of the word it matches, so its case survives:
    /// `person`/`people` turns "Person" into "People".
    pub fn add_irregular(&mut self, singular: &str, plural: &str) -> InflectionResult<&mut Self> {
        let (Some(singular_head), Some(plural_head)) = (split_head(singular), split_head(plural))
        else {
            return Err(PatternError::EmptyIrregular {
                singular: singular.to_string(),
                plural: plural.to_string(),
            });
        };

        self.add_plural_rule(
            &anchored_pattern(singular_head),
            &format!("${{1}}{}", escape_replacement(plural_head.1)),
        )?;
        self.add_singular_rule(
            &anchored_pattern(plural_head),
            &format!("${{1}}{}", escape_replacement(singular_head.1)),
        )?;
        Ok(self)
    }

    /// Whether `word` is exempt from inflection.
    pub fn is_uncountable(&self, word: &str) -> bool {
        self.uncountables.contains(&word.to_lowercase())
    }

    /// Plural rules in registration order.
    pub fn plurals(&self) -> &[Rule] {
        &self.plurals
    }

    /// Singular rules in registration order.
    pub fn singulars(&self) -> &[Rule] {
        &self.singulars
    }

    /// Uncountable words (lowercase), in no particular order.
    pub fn uncountables(&self) -> impl Iterator<Item = &str> {
        self.uncountables.iter().map(String::as_str)
    }

    /// Pluralize `word`.
    ///
    /// ```
    /// use inflect::Inflections;
    ///
    /// let english = Inflections::english();
    /// assert_eq!(english.pluralize("category"), "categories");
    /// assert_eq!(english.pluralize("Person"), "People");
    /// assert_eq!(english.pluralize("sheep"), "sheep");
    /// ```
    pub fn pluralize(&self, word: &str) -> String {
        self.apply_rules(&self.plurals, word)
    }

    /// Singularize `word`.
    ///
    /// ```
    /// use inflect::Inflections;
    ///
    /// let english = Inflections::english();
    /// assert_eq!(english.singularize("categories"), "category");
    /// assert_eq!(english.singularize("people"), "person");
    /// ```
    pub fn singularize(&self, word: &str) -> String {
        self.apply_rules(&self.singulars, word)
    }

    /// Run `word` through `rules`, newest rule first.
    ///
    /// Uncountable words, empty words and words no rule matches come back
    /// unchanged.
    pub fn apply_rules(&self, rules: &[Rule], word: &str) -> String {
        if word.is_empty() || self.is_uncountable(word) {
            return word.to_string();
        }

        for rule in rules.iter().rev() {
            if let Some(result) = rule.apply(word) {
                log::trace!("Rule /{}/ rewrote '{}' to '{}'", rule.pattern(), word, result);
                return result;
            }
        }

        word.to_string()
    }
}

/// Split a word into its first character and the remainder.
fn split_head(word: &str) -> Option<(&str, &str)> {
    let first = word.chars().next()?;
    Some(word.split_at(first.len_utf8()))
}

/// `(<head>)<rest>$` with both parts matched literally.
fn anchored_pattern((head, rest): (&str, &str)) -> String {
    format!("({}){}$", regex::escape(head), regex::escape(rest))
}
