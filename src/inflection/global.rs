//! The process-wide registry.
//!
//! Built once, on first use or through [`init`], and read-only afterwards.

use once_cell::sync::OnceCell;
use thiserror::Error;

use super::registry::Inflections;

static INFLECTIONS: OnceCell<Inflections> = OnceCell::new();

/// Error returned when the process-wide registry is already in place.
#[derive(Debug, Error)]
pub enum InitError {
    /// Holds the registry that was not installed.
    #[error("Inflection registry already initialized")]
    AlreadyInitialized(Box<Inflections>),
}

/// Install `inflections` as the process-wide registry.
///
/// Must run before the first call to [`get`] (or any free function that
/// reads it, such as [`crate::pluralize`]). Once a registry is in place it
/// cannot be replaced.
pub fn init(inflections: Inflections) -> Result<&'static Inflections, InitError> {
    let mut candidate = Some(inflections);
    let installed = INFLECTIONS.get_or_init(|| candidate.take().unwrap_or_default());

    match candidate {
        None => {
            log::debug!("Installed custom inflection registry");
            Ok(installed)
        }
        Some(rejected) => {
            log::warn!("Inflection registry already initialized, ignoring replacement");
            Err(InitError::AlreadyInitialized(Box::new(rejected)))
        }
    }
}

/// The process-wide registry, seeded with English rules on first use.
pub fn get() -> &'static Inflections {
    INFLECTIONS.get_or_init(Inflections::english)
}

/// Whether the process-wide registry has been built.
pub fn is_initialized() -> bool {
    INFLECTIONS.get().is_some()
}
