//! The English seed table.
//!
//! Order is precedence: general suffix rules first, then the more specific
//! ones, then irregular pairs. Later entries win.

use super::registry::Inflections;
use super::rule::InflectionResult;

/// General plural rules, lowest precedence first.
pub const PLURALS: &[(&str, &str)] = &[
    ("$", "s"),
    ("s$", "s"),
    ("(ax|test)is$", "$1es"),
    ("(octop|vir)us$", "$1i"),
    ("(alias|status)$", "$1es"),
    ("(bu)s$", "$1ses"),
    ("(buffal|tomat)o$", "$1oes"),
    ("([ti])um$", "$1a"),
    ("sis$", "ses"),
    ("(?:([^f])fe|([lr])f)$", "$1$2ves"),
    ("(hive)$", "$1s"),
    ("([^aeiouy]|qu)y$", "$1ies"),
    ("(x|ch|ss|sh)$", "$1es"),
    ("(matr|vert|ind)ix|ex$", "$1ices"),
    ("([m|l])ouse$", "$1ice"),
    ("^(ox)$", "$1en"),
    ("(quiz)$", "$1zes"),
];

/// General singular rules, lowest precedence first.
pub const SINGULARS: &[(&str, &str)] = &[
    ("s$", ""),
    ("(n)ews$", "$1ews"),
    ("([ti])a$", "$1um"),
    (
        "((a)naly|(b)a|(d)iagno|(p)arenthe|(p)rogno|(s)ynop|(t)he)ses$",
        "$1$2sis",
    ),
    ("(^analy)ses$", "$1sis"),
    ("([^f])ves$", "$1fe"),
    ("(hive)s$", "$1"),
    ("(tive)s$", "$1"),
    ("([lr])ves$", "$1f"),
    ("([^aeiouy]|qu)ies$", "$1y"),
    ("(s)eries$", "$1eries"),
    ("(m)ovies$", "$1ovie"),
    ("(x|ch|ss|sh)es$", "$1"),
    ("([m|l])ice$", "$1ouse"),
    ("(bus)es$", "$1"),
    ("(o)es$", "$1"),
    ("(shoe)s$", "$1"),
    ("(cris|ax|test)es$", "$1is"),
    ("(octop|vir)i$", "$1us"),
    ("(alias|status)es$", "$1"),
    ("^(ox)en", "$1"),
    ("(vert|ind)ices$", "$1ex"),
    ("(matr)ices$", "$1ix"),
    ("(quiz)zes$", "$1"),
];

/// Irregular (singular, plural) pairs.
pub const IRREGULARS: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("child", "children"),
    ("sex", "sexes"),
    ("move", "moves"),
];

pub const UNCOUNTABLES: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
];

/// Register the English table into `inflections`, after any rules it already holds.
pub fn seed(inflections: &mut Inflections) -> InflectionResult<()> {
    for (pattern, replacement) in PLURALS {
        inflections.add_plural_rule(pattern, replacement)?;
    }
    for (pattern, replacement) in SINGULARS {
        inflections.add_singular_rule(pattern, replacement)?;
    }
    for (singular, plural) in IRREGULARS {
        inflections.add_irregular(singular, plural)?;
    }
    for word in UNCOUNTABLES {
        inflections.add_uncountable(word);
    }
    Ok(())
}
