//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::SiteConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable carrying the `x-rapidapi-host` value.
pub const ENV_API_HOST: &str = "RAPIDAPI_HOST";
/// Environment variable carrying the `x-rapidapi-key` value.
pub const ENV_API_KEY: &str = "RAPIDAPI_KEY";
/// Environment variable overriding `listener.bind_address`.
pub const ENV_BIND: &str = "MATCHDAY_BIND";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load, apply process environment overrides, and validate.
///
/// With no path the built-in defaults are used.
pub fn load(path: Option<&Path>) -> Result<SiteConfig, ConfigError> {
    load_with(path, |key| std::env::var(key).ok())
}

/// Like [`load`], reading overrides through `lookup` instead of the process
/// environment.
pub fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<SiteConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => parse_file(path)?,
        None => SiteConfig::default(),
    };
    apply_env_overrides(&mut config, lookup);
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

fn parse_file(path: &Path) -> Result<SiteConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Overlay environment values onto `config`. Empty values are ignored.
pub fn apply_env_overrides<F>(config: &mut SiteConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |key: &str| lookup(key).filter(|v| !v.is_empty());

    if let Some(host) = lookup(ENV_API_HOST) {
        config.football.api_host = Some(host);
    }
    if let Some(key) = lookup(ENV_API_KEY) {
        config.football.api_key = Some(key);
    }
    if let Some(bind) = lookup(ENV_BIND) {
        config.listener.bind_address = bind;
    }
}
