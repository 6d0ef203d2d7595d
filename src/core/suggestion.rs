use thiserror::Error;

use crate::core::sanitizer::sanitize;

/// Longest accepted suggestion, counted in characters after sanitization
pub const MAX_SUGGESTION_CHARS: usize = 500;

/// Why a submitted suggestion was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Suggestion is empty")]
    Empty,

    #[error("Suggestion has {length} characters, the limit is {MAX_SUGGESTION_CHARS}")]
    TooLong { length: usize },
}

/// Turn raw visitor input into storable suggestion text
///
/// The input is trimmed, then sanitized; what is left must be between 1 and
/// `MAX_SUGGESTION_CHARS` characters.
pub fn validate_suggestion(raw: Option<&str>) -> Result<String, ValidationError> {
    let text = sanitize(raw.map(str::trim)).ok_or(ValidationError::Empty)?;

    let length = text.chars().count();
    if length > MAX_SUGGESTION_CHARS {
        return Err(ValidationError::TooLong { length });
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_text() {
        assert_eq!(
            validate_suggestion(Some("  Mais gatos por favor!  ")),
            Ok("Mais gatos por favor!".to_string())
        );
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(validate_suggestion(None), Err(ValidationError::Empty));
        assert_eq!(validate_suggestion(Some("")), Err(ValidationError::Empty));
        assert_eq!(validate_suggestion(Some("   \n\t")), Err(ValidationError::Empty));
        assert_eq!(validate_suggestion(Some("<b></b>")), Err(ValidationError::Empty));
        assert_eq!(validate_suggestion(Some("🐶")), Err(ValidationError::Empty));
    }

    #[test]
    fn test_length_boundary() {
        assert!(validate_suggestion(Some(&"a".repeat(500))).is_ok());
        assert_eq!(
            validate_suggestion(Some(&"a".repeat(501))),
            Err(ValidationError::TooLong { length: 501 })
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let text = "ç".repeat(500);
        assert_eq!(validate_suggestion(Some(&text)), Ok(text));
    }

    #[test]
    fn test_length_is_measured_after_sanitizing() {
        let raw = format!("<p>{}</p>{}", "a".repeat(500), "🐱".repeat(50));
        assert_eq!(validate_suggestion(Some(&raw)), Ok("a".repeat(500)));
    }
}
