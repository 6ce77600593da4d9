//! Centralized validation helpers.

use std::path::Path;

use crate::core::error::PipelineError;

/// Fail with `NotFound` unless `path` exists.
///
/// Used by commands that check their input before opening it, so that a
/// missing file is reported the same way regardless of how it is read later.
///
/// # Errors
///
/// Returns `PipelineError::NotFound` naming `what` and the path.
pub fn ensure_exists(what: &'static str, path: &Path) -> Result<(), PipelineError> {
    if path.exists() {
        Ok(())
    } else {
        Err(PipelineError::not_found(what, path))
    }
}

/// Validate a key separator for the config flattener.
///
/// The separator ends up inside shell variable names, so it must be
/// non-empty and contain only ASCII letters, digits or underscores.
///
/// # Examples
///
/// ```
/// use metagen_utils::utils::validation::parse_key_separator;
///
/// assert_eq!(parse_key_separator("__").unwrap(), "__");
/// assert!(parse_key_separator("").is_err());
/// assert!(parse_key_separator("-").is_err());
/// ```
///
/// # Errors
///
/// Returns a message describing why the separator was rejected.
pub fn parse_key_separator(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("separator must not be empty".to_string());
    }
    if let Some(bad) = s.chars().find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
        return Err(format!(
            "'{bad}' is not allowed in a shell variable name"
        ));
    }
    Ok(s.to_string())
}
