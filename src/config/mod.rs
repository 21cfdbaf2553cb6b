//! Configuration for the inflection registry.
//!
//! Lets a deployment add its own rules, irregular pairs and uncountable words
//! at startup without code changes.

mod settings;

pub use settings::{InflectionSettings, RulePair, Settings, SettingsError, CONFIG_ENV_VAR};
