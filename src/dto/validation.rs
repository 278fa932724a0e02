//! Validation helpers for DTOs.

use validator::ValidationError;

use crate::svg::markup::is_svg_markup;

/// Validates that a username is 3 to 32 characters of `[a-z0-9-]`.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.len() < 3 || username.len() > 32 {
        let mut err = ValidationError::new("username_length");
        err.message = Some(
            format!(
                "Username must be between 3 and 32 characters (got {})",
                username.len()
            )
            .into(),
        );
        return Err(err);
    }

    if !username
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        let mut err = ValidationError::new("username_format");
        err.message =
            Some("Username must contain only lowercase letters, digits, and dashes".into());
        return Err(err);
    }

    Ok(())
}

/// Validates that a tag is 1 to 32 characters of `[a-z0-9-]`.
///
/// The tag charset doubles as an injection guard: tags are matched against
/// a JSON column with `LIKE`, so quoting and wildcard characters must never
/// reach the storage layer.
pub fn validate_tag(tag: &str) -> Result<(), ValidationError> {
    if tag.is_empty() || tag.len() > 32 {
        let mut err = ValidationError::new("tag_length");
        err.message = Some(format!("Tags must be 1 to 32 characters (got {})", tag.len()).into());
        return Err(err);
    }

    if !tag
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        let mut err = ValidationError::new("tag_format");
        err.message = Some("Tags must contain only lowercase letters, digits, and dashes".into());
        return Err(err);
    }

    Ok(())
}

/// Validates that a string parses as an SVG document.
pub fn validate_svg_markup(svg: &str) -> Result<(), ValidationError> {
    if !is_svg_markup(svg) {
        let mut err = ValidationError::new("svg_markup");
        err.message = Some("Field must contain a valid SVG document".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_username_valid() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("icon-smith-42").is_ok());
        assert!(validate_username("abc").is_ok());
    }

    #[test]
    fn test_validate_username_invalid_length() {
        assert!(validate_username("ab").is_err()); // too short
        assert!(validate_username(&"a".repeat(33)).is_err()); // too long
        assert!(validate_username("").is_err()); // empty
    }

    #[test]
    fn test_validate_username_invalid_format() {
        assert!(validate_username("Alice").is_err()); // uppercase
        assert!(validate_username("alice smith").is_err()); // space
        assert!(validate_username("alice_smith").is_err()); // underscore
    }

    #[test]
    fn test_validate_tag() {
        assert!(validate_tag("ui").is_ok());
        assert!(validate_tag("arrow-heads").is_ok());
        assert!(validate_tag("").is_err());
        assert!(validate_tag("UI").is_err());
        assert!(validate_tag("100%").is_err()); // LIKE wildcard
        assert!(validate_tag("a\"b").is_err()); // JSON quote
    }

    #[test]
    fn test_validate_svg_markup() {
        assert!(validate_svg_markup("<svg viewBox=\"0 0 1 1\"/>").is_ok());
        assert!(validate_svg_markup("<div>nope</div>").is_err());
        assert!(validate_svg_markup("plain text").is_err());
    }
}
