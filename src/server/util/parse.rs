use std::str::FromStr;

use crate::server::{error::AppError, model::user::Role};

/// Parses a stored role string into a `Role`.
///
/// # Returns
/// - `Ok(Role)` - Successfully parsed the stored string
/// - `Err(AppError::InternalErr(UnknownRole))` - The string is not one of the
///   known tiers
pub fn parse_role_from_string(value: &str) -> Result<Role, AppError> {
    let role = Role::from_str(value)?;

    Ok(role)
}

/// Normalizes an email for storage and roster comparison: trimmed, lowercased.
pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Normalizes a tag name: trimmed, lowercased, inner whitespace collapsed to
/// single hyphens.
pub fn normalize_tag_name(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_email_case_and_whitespace() {
        assert_eq!(normalize_email("  Ada@Example.EDU "), "ada@example.edu");
    }

    #[test]
    fn normalizes_tag_names() {
        assert_eq!(normalize_tag_name("  Machine   Learning "), "machine-learning");
        assert_eq!(normalize_tag_name("Rust"), "rust");
    }
}
