//! Method-call syntax for the inflection and case functions.

use crate::{case, inflection};

/// Inflection methods on string slices.
///
/// ```
/// use inflect::Inflect;
///
/// assert_eq!("Person".pluralize(), "People");
/// assert_eq!("active_record".camelize(), "activeRecord");
/// ```
pub trait Inflect {
    fn pluralize(&self) -> String;
    fn singularize(&self) -> String;
    fn underscore(&self) -> String;
    fn camelize(&self) -> String;
    fn pascalize(&self) -> String;
    fn humanize(&self) -> String;
    fn titleize(&self) -> String;
    fn capitalize(&self) -> String;
    fn uncapitalize(&self) -> String;
    fn dasherize(&self) -> String;
    fn to_lower_first(&self) -> String;
    fn capitalize_if_all_upper(&self) -> String;
}

impl Inflect for str {
    fn pluralize(&self) -> String {
        inflection::pluralize(self)
    }

    fn singularize(&self) -> String {
        inflection::singularize(self)
    }

    fn underscore(&self) -> String {
        case::underscore(self)
    }

    fn camelize(&self) -> String {
        case::camelize(self)
    }

    fn pascalize(&self) -> String {
        case::pascalize(self)
    }

    fn humanize(&self) -> String {
        case::humanize(self)
    }

    fn titleize(&self) -> String {
        case::titleize(self)
    }

    fn capitalize(&self) -> String {
        case::capitalize(self)
    }

    fn uncapitalize(&self) -> String {
        case::uncapitalize(self)
    }

    fn dasherize(&self) -> String {
        case::dasherize(self)
    }

    fn to_lower_first(&self) -> String {
        case::to_lower_first(self)
    }

    fn capitalize_if_all_upper(&self) -> String {
        case::capitalize_if_all_upper(self)
    }
}
