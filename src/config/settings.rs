//! TOML-based configuration for inflect.
//!
//! Example configuration:
//! ```toml
//! [inflections]
//! defaults = true                      # start from the English rule table
//! uncountables = ["metadata", "feedback"]
//! irregulars = [["cactus", "cacti"]]
//! plurals = [["(resp)onse$", "${1}onses"]]
//! singulars = [["(resp)onses$", "${1}onse"]]
//! ```
//!
//! Configured entries are registered after the defaults, so they take
//! precedence over them.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::inflection::{Inflections, PatternError};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "INFLECT_CONFIG";

/// A `[pattern, replacement]` or `[singular, plural]` pair.
pub type RulePair = (String, String);

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid inflection rule: {0}")]
    InvalidRule(#[from] PatternError),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Inflection rule configuration.
    pub inflections: InflectionSettings,
}

/// Rules layered onto (or replacing) the English defaults.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct InflectionSettings {
    /// Seed the registry with the English rule table first.
    pub defaults: bool,

    /// Extra plural rules, lowest precedence first.
    pub plurals: Vec<RulePair>,

    /// Extra singular rules, lowest precedence first.
    pub singulars: Vec<RulePair>,

    /// Extra irregular `[singular, plural]` pairs.
    pub irregulars: Vec<RulePair>,

    /// Extra uncountable words.
    pub uncountables: Vec<String>,
}

impl Default for InflectionSettings {
    fn default() -> Self {
        Self {
            defaults: true,
            plurals: Vec::new(),
            singulars: Vec::new(),
            irregulars: Vec::new(),
            uncountables: Vec::new(),
        }
    }
}

impl InflectionSettings {
    /// Whether these settings add nothing to the registry they start from.
    pub fn is_empty(&self) -> bool {
        self.plurals.is_empty()
            && self.singulars.is_empty()
            && self.irregulars.is_empty()
            && self.uncountables.is_empty()
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let settings: Settings = content.parse()?;
        log::debug!("Loaded inflection settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from the default config file locations.
    ///
    /// Searches in order:
    /// 1. Environment variable `INFLECT_CONFIG`
    /// 2. `./inflect.toml`
    /// 3. `~/.config/inflect/config.toml`
    pub fn load() -> Result<Self, SettingsError> {
        if let Ok(path) = env::var(CONFIG_ENV_VAR) {
            return Self::from_file(&path);
        }

        let local_config = PathBuf::from("inflect.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("inflect").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        log::debug!("No inflection config file found, using defaults");
        Ok(Settings::default())
    }

    /// Build the registry these settings describe.
    pub fn build_inflections(&self) -> Result<Inflections, SettingsError> {
        Inflections::from_settings(&self.inflections)
    }
}

impl FromStr for Settings {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

impl Inflections {
    /// Build a registry from configuration.
    ///
    /// Registration order: defaults (if enabled), plurals, singulars,
    /// irregulars, uncountables.
    pub fn from_settings(settings: &InflectionSettings) -> Result<Self, SettingsError> {
        let mut inflections = if settings.defaults {
            Inflections::english()
        } else {
            Inflections::new()
        };

        for (pattern, replacement) in &settings.plurals {
            inflections.add_plural_rule(pattern, replacement)?;
        }
        for (pattern, replacement) in &settings.singulars {
            inflections.add_singular_rule(pattern, replacement)?;
        }
        for (singular, plural) in &settings.irregulars {
            inflections.add_irregular(singular, plural)?;
        }
        for word in &settings.uncountables {
            inflections.add_uncountable(word);
        }

        if !settings.is_empty() {
            log::debug!(
                "Applied configured inflections: {} plural, {} singular, {} irregular, {} uncountable",
                settings.plurals.len(),
                settings.singulars.len(),
                settings.irregulars.len(),
                settings.uncountables.len()
            );
        }
        Ok(inflections)
    }
}
