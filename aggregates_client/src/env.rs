use thiserror::Error;

/// An environment variable required by a source is not set.
#[derive(Debug, Error)]
#[error("Missing environment variable: {0}")]
pub struct MissingEnvVarError(pub String);

/// Reads an environment variable, returning a structured error if it's missing
/// or empty.
///
/// # Arguments
/// * `name` - The name of the environment variable to read.
pub fn get_env_var(name: &str) -> Result<String, MissingEnvVarError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(MissingEnvVarError(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn missing_var_names_the_variable() {
        // SAFETY: serialized with every other env-mutating test.
        unsafe { std::env::remove_var("MARBLE_TEST_UNSET_VAR") };
        let err = get_env_var("MARBLE_TEST_UNSET_VAR").unwrap_err();
        assert_eq!(err.to_string(), "Missing environment variable: MARBLE_TEST_UNSET_VAR");
    }

    #[test]
    #[serial]
    fn blank_var_counts_as_missing() {
        // SAFETY: serialized with every other env-mutating test.
        unsafe { std::env::set_var("MARBLE_TEST_BLANK_VAR", "  ") };
        assert!(get_env_var("MARBLE_TEST_BLANK_VAR").is_err());

        unsafe { std::env::set_var("MARBLE_TEST_BLANK_VAR", "key") };
        assert_eq!(get_env_var("MARBLE_TEST_BLANK_VAR").unwrap(), "key");
        unsafe { std::env::remove_var("MARBLE_TEST_BLANK_VAR") };
    }
}
