//! Remote response validation.

/// Minimum accepted length for a remote response, in characters.
pub const MIN_RESPONSE_LEN: usize = 10;

/// Clean and validate a raw remote response.
///
/// Rejects empty or whitespace-only text and anything shorter than
/// [`MIN_RESPONSE_LEN`] after trimming. Returns the trimmed text on
/// success; `None` means the caller should degrade to the fallback
/// responder.
pub fn validate_response(raw: &str) -> Option<String> {
    let cleaned = raw.trim();

    if cleaned.chars().count() < MIN_RESPONSE_LEN {
        return None;
    }

    Some(cleaned.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_whitespace() {
        assert_eq!(validate_response(""), None);
        assert_eq!(validate_response("   \n\t  "), None);
    }

    #[test]
    fn rejects_short_responses() {
        assert_eq!(validate_response("too short"), None); // 9 chars
        assert_eq!(validate_response("  hi  "), None);
    }

    #[test]
    fn accepts_and_trims_valid_responses() {
        assert_eq!(
            validate_response("  Welcome to the hunt, Agent.  "),
            Some("Welcome to the hunt, Agent.".to_string())
        );
        // Exactly at the threshold
        assert_eq!(validate_response("1234567890"), Some("1234567890".to_string()));
    }
}
