//! Type definitions for the validation system

mod field_name;
mod text_input;

// Re-export commonly used types and functions
pub use field_name::FieldName;
pub use text_input::TextInput;
