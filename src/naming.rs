//! Collection names derived from type names.
//!
//! Storage layers name a collection after the type it holds: `Customer` is
//! stored in `customers`, `Person` in `people`.

use crate::case::to_lower_first;
use crate::inflection::{self, Inflections};

/// Collection name for a type name, using the process-wide registry.
///
/// ```
/// assert_eq!(inflect::naming::collection_name("CustomerInvite"), "customerInvites");
/// ```
pub fn collection_name(type_name: &str) -> String {
    collection_name_with(inflection::get(), type_name)
}

/// Collection name for a type name, using `inflections`.
pub fn collection_name_with(inflections: &Inflections, type_name: &str) -> String {
    to_lower_first(&inflections.pluralize(type_name))
}

/// Collection name for `T`, from its unqualified type name.
pub fn collection_name_of<T: ?Sized>() -> String {
    collection_name(short_type_name::<T>())
}

/// `my_app::model::Order<u32>` → `Order`.
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let without_generics = full.split('<').next().unwrap_or(full);
    without_generics
        .rsplit("::")
        .next()
        .unwrap_or(without_generics)
}
