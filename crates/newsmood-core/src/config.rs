use crate::app_config::{AppConfig, Environment};
use crate::query::{MAX_LIMIT, MIN_LIMIT};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a
/// plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_secs = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        let secs = raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })?;
        if secs == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(secs)
    };

    let newsapi_key = require("NEWSAPI_KEY")?;

    let env = parse_environment(&or_default("NEWSMOOD_ENV", "development"));
    let log_level = or_default("NEWSMOOD_LOG_LEVEL", "warn");
    let newsapi_base_url = or_default("NEWSMOOD_NEWSAPI_BASE_URL", "https://newsapi.org/");

    let request_timeout_secs = parse_secs("NEWSMOOD_REQUEST_TIMEOUT_SECS", "30")?;
    let fetch_timeout_secs = parse_secs("NEWSMOOD_FETCH_TIMEOUT_SECS", "45")?;
    let user_agent = or_default("NEWSMOOD_USER_AGENT", "newsmood/0.1 (headline-sentiment)");

    let default_limit = parse_u32("NEWSMOOD_DEFAULT_LIMIT", "15")?;
    if !(MIN_LIMIT..=MAX_LIMIT).contains(&default_limit) {
        return Err(ConfigError::InvalidEnvVar {
            var: "NEWSMOOD_DEFAULT_LIMIT".to_string(),
            reason: format!("must be between {MIN_LIMIT} and {MAX_LIMIT}, got {default_limit}"),
        });
    }

    let export_dir = PathBuf::from(or_default("NEWSMOOD_EXPORT_DIR", "."));

    Ok(AppConfig {
        env,
        log_level,
        newsapi_key,
        newsapi_base_url,
        request_timeout_secs,
        fetch_timeout_secs,
        user_agent,
        default_limit,
        export_dir,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}
