//! Resource name grammar.
//!
//! A name is 1-64 characters of `[a-z0-9-]`, with no leading, trailing, or
//! doubled hyphen. Names are joined onto search roots to build spec file
//! paths, so this check must run before any such join.

use crate::error::NameError;

/// Maximum name length in characters.
pub const MAX_NAME_LEN: usize = 64;

/// Validate a resource name against the name grammar.
pub fn validate_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }

    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(NameError::TooLong { len });
    }

    if name.starts_with('-') || name.ends_with('-') {
        return Err(NameError::HyphenPlacement);
    }

    if name.contains("--") {
        return Err(NameError::ConsecutiveHyphens);
    }

    if let Some(bad) = name
        .chars()
        .find(|c| !matches!(c, 'a'..='z' | '0'..='9' | '-'))
    {
        return Err(NameError::InvalidCharacter(bad));
    }

    Ok(())
}
