//! Constants used throughout the validation system


/// Maximum length for a form description
pub const MAX_DESCRIPTION_LENGTH: usize = 2_000;
/// Maximum length for a form title or a field label
pub const MAX_LABEL_LENGTH: usize = 250;
/// Maximum length for a field name
pub const MAX_FIELD_NAME_LENGTH: usize = 64;
