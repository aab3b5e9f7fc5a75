//! Environment variable interpolation for configuration

use super::error::ConfigError;
use regex::{Captures, Regex};
use std::env;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("valid env var pattern"));

/// Replace every `${VAR}` reference in `content` with the variable's value
pub fn interpolate_env_vars(content: &str) -> Result<String, ConfigError> {
    let mut missing: Option<String> = None;

    let result = ENV_VAR_PATTERN.replace_all(content, |cap: &Captures<'_>| {
        match env::var(&cap[1]) {
            Ok(value) => value,
            Err(_) => {
                missing.get_or_insert_with(|| cap[1].to_string());
                String::new()
            }
        }
    });

    // Report the first missing variable
    if let Some(var) = missing {
        return Err(ConfigError::EnvVarNotFound { var });
    }

    Ok(result.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate_env_vars() {
        env::set_var("MISTRAL_OPTIONS_TEST_MODEL", "open-mistral-7b");

        let content = "model: ${MISTRAL_OPTIONS_TEST_MODEL}";
        let result = interpolate_env_vars(content).unwrap();
        assert_eq!(result, "model: open-mistral-7b");

        env::remove_var("MISTRAL_OPTIONS_TEST_MODEL");
    }

    #[test]
    fn test_missing_env_var() {
        let content = "model: ${MISTRAL_OPTIONS_MISSING_VAR}";
        let result = interpolate_env_vars(content);

        if let Err(ConfigError::EnvVarNotFound { var }) = result {
            assert_eq!(var, "MISTRAL_OPTIONS_MISSING_VAR");
        } else {
            panic!("Expected EnvVarNotFound error");
        }
    }

    #[test]
    fn test_lowercase_reference_left_alone() {
        let content = "stop: [\"${not_a_var}\"]";
        assert_eq!(interpolate_env_vars(content).unwrap(), content);
    }
}
