//! Small shared helpers.

/// Truncate a string to `max_chars`, appending an ellipsis when cut.
/// Used for log previews of user messages and responses.
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_chars).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("exact", 5), "exact");
        assert_eq!(truncate_str("a longer string", 8), "a longer...");
    }
}
