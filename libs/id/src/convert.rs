//! Two-way string conversion for identifiers.
//!
//! These are the hooks a mapping layer needs at the application boundary:
//! `parse` turns an external string into an identifier using the type's
//! current policy, `format` hands back the canonical string. For any
//! canonical identifier `parse(&format(&id)) == id`.

use crate::{FixedWidth, IdError};

/// Parses an external string into an identifier.
pub fn parse<T: FixedWidth>(s: &str) -> T {
    T::of(s)
}

/// Formats an identifier as its canonical string.
pub fn format<T: FixedWidth>(id: &T) -> String {
    id.value().to_owned()
}

/// Parses a possibly absent string, failing with [`IdError::MissingValue`].
pub fn parse_opt<T: FixedWidth>(s: Option<&str>) -> Result<T, IdError> {
    T::try_from_option(s)
}

/// Formats a possibly absent identifier; absence maps to absence.
pub fn format_opt<T: FixedWidth>(id: Option<&T>) -> Option<String> {
    id.map(format)
}
