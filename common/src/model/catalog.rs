//! Fixed catalogs offered by the configuration UI. The database field list
//! mirrors what the connected database exposes; its source of truth lives
//! with the service, and the session only enforces uniqueness against
//! whatever catalog it is handed.

/// Database-backed field names selectable in the builder.
pub const DATABASE_FIELD_TYPES: &[&str] = &["course", "salary"];

/// Free-text field types with well-known names.
pub const PREDEFINED_TEXT_TYPES: &[&str] = &["name", "password"];

/// Alphabet offered for the required-special-characters rule.
pub const SPECIAL_CHARACTERS: &[char] = &['@', '#', '$', '%', '&', '*', '!'];
