// ABOUTME: Typed environment variable readers
// ABOUTME: Invalid values fall back to defaults with a warning instead of failing

use tracing::warn;

/// Read a string variable, treating empty values as unset
pub fn env_string(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}

/// Read a u64 variable, falling back to `default` when unset or invalid
pub fn env_u64_or(name: &str, default: u64) -> u64 {
    match std::env::var(name) {
        Ok(value) => match value.trim().parse::<u64>() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!("Invalid value for {}: {:?}, using {}", name, value, default);
                default
            }
        },
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_string_empty_is_none() {
        std::env::set_var("HOMEES_TEST_EMPTY", "   ");
        assert_eq!(env_string("HOMEES_TEST_EMPTY"), None);
        std::env::set_var("HOMEES_TEST_EMPTY", "valeur");
        assert_eq!(env_string("HOMEES_TEST_EMPTY"), Some("valeur".to_string()));
        std::env::remove_var("HOMEES_TEST_EMPTY");
    }

    #[test]
    fn test_env_u64_or_invalid_falls_back() {
        std::env::set_var("HOMEES_TEST_U64", "pas-un-nombre");
        assert_eq!(env_u64_or("HOMEES_TEST_U64", 30), 30);
        std::env::set_var("HOMEES_TEST_U64", "45");
        assert_eq!(env_u64_or("HOMEES_TEST_U64", 30), 45);
        std::env::remove_var("HOMEES_TEST_U64");
    }
}
