//! Represents all possible errors in the application

pub const FORM_NOT_FOUND: &str = "Form not found";

pub const INVALID_SUBMISSION: &str = "Invalid submission";

pub const STORAGE_ERROR: &str = "Storage failure";
