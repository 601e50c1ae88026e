//! API key resolution.
//!
//! Keys come from the config file (`api_key`, discouraged) or from the
//! environment variable the config names. Either way the credential
//! validity rules from the domain apply: blank values and template
//! placeholders count as absent.

use butler_domain::is_valid_credential;

/// Resolve an API key from a direct config value or an environment
/// variable, in that order. Returns `None` when neither source holds a
/// usable credential.
pub fn resolve_key(direct: Option<&str>, env_var: &str) -> Option<String> {
    if is_valid_credential(direct) {
        return direct.map(|k| k.trim().to_string());
    }

    let from_env = std::env::var(env_var).ok();
    if is_valid_credential(from_env.as_deref()) {
        from_env.map(|k| k.trim().to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_key_wins_over_env() {
        // Env var name chosen to not exist in any test environment
        assert_eq!(
            resolve_key(Some("sk-direct"), "BUTLER_TEST_NO_SUCH_VAR"),
            Some("sk-direct".to_string())
        );
    }

    #[test]
    fn placeholder_direct_key_is_ignored() {
        assert_eq!(
            resolve_key(Some("your_api_key_here"), "BUTLER_TEST_NO_SUCH_VAR"),
            None
        );
    }

    #[test]
    fn env_key_is_used_when_direct_is_absent() {
        // set_var is process-global; use a variable unique to this test
        unsafe { std::env::set_var("BUTLER_TEST_GEMINI_KEY", "AIza-test") };
        assert_eq!(
            resolve_key(None, "BUTLER_TEST_GEMINI_KEY"),
            Some("AIza-test".to_string())
        );
        unsafe { std::env::remove_var("BUTLER_TEST_GEMINI_KEY") };
    }
}
