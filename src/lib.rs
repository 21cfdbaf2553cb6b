//! # inflect
//!
//! Rule-driven English inflection and identifier case conversion.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │        Callers (naming, storage layers, codegen)         │
//! └─────────────────────────────────────────────────────────┘
//!              │                              │
//!              ▼ [inflection]                 ▼ [case]
//! ┌──────────────────────────────┐ ┌────────────────────────┐
//! │  pluralize / singularize      │ │  underscore, camelize, │
//! │  uncountables → rules,        │ │  pascalize, humanize,  │
//! │  newest rule first            │ │  titleize, ordinalize  │
//! └──────────────────────────────┘ └────────────────────────┘
//!              │
//!              ▼ (read-only after startup)
//! ┌──────────────────────────────┐
//! │  Inflections registry         │
//! │  English seed table + config  │
//! └──────────────────────────────┘
//! ```
//!
//! ```
//! use inflect::{pluralize, singularize, camelize, ordinalize};
//!
//! assert_eq!(pluralize("person"), "people");
//! assert_eq!(singularize("categories"), "category");
//! assert_eq!(camelize("active_record"), "activeRecord");
//! assert_eq!(ordinalize(21), "21st");
//! ```

pub mod case;
pub mod config;
pub mod ext;
pub mod inflection;
pub mod naming;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::case::{
        camelize, capitalize, capitalize_if_all_upper, dasherize, humanize, ordinalize,
        ordinalize_str, pascalize, replace, titleize, to_lower_first, uncapitalize, underscore,
        Comparison,
    };
    pub use crate::ext::Inflect;
    pub use crate::inflection::{pluralize, singularize, Inflections};
}

// Also export at crate root for convenience
pub use case::{
    camelize, capitalize, capitalize_if_all_upper, dasherize, humanize, ordinalize,
    ordinalize_str, pascalize, replace, titleize, to_lower_first, uncapitalize, underscore,
    Comparison, ParseError,
};
pub use config::{Settings, SettingsError};
pub use ext::Inflect;
pub use inflection::{pluralize, singularize, InitError, Inflections, PatternError, Rule};
