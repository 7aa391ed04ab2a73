use thiserror::Error;

use crate::app_config::{AppConfig, Environment};

const DEFAULT_SITE_URL: &str = "http://localhost:3000";

/// Checked in order; the first non-blank value wins.
const SITE_URL_VARS: [&str; 2] = ["AETHER_SITE_URL", "NEXT_PUBLIC_SITE_URL"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
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
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so the only failure mode is a value that is
/// set but malformed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("AETHER_ENV", "development"));

    let bind_addr = or_default("AETHER_BIND_ADDR", "0.0.0.0:3000")
        .parse::<SocketAddr>()
        .map_err(|e| invalid("AETHER_BIND_ADDR", e.to_string()))?;
    let log_level = or_default("AETHER_LOG_LEVEL", "info");

    let site_url = match SITE_URL_VARS.iter().find_map(|&var| {
        lookup(var)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(|raw| (var, raw))
    }) {
        Some((var, raw)) => normalize_site_url(&raw)
            .ok_or_else(|| invalid(var, format!("not an http(s) URL: {raw}")))?,
        None => DEFAULT_SITE_URL.to_string(),
    };

    let generator_seed = match lookup("AETHER_GENERATOR_SEED") {
        Ok(raw) if !raw.trim().is_empty() => Some(
            raw.trim()
                .parse::<u64>()
                .map_err(|e| invalid("AETHER_GENERATOR_SEED", e.to_string()))?,
        ),
        _ => None,
    };

    let max_count = or_default("AETHER_MAX_COUNT", "10000")
        .parse::<usize>()
        .map_err(|e| invalid("AETHER_MAX_COUNT", e.to_string()))?;
    if max_count == 0 {
        return Err(invalid("AETHER_MAX_COUNT", "must be at least 1".to_string()));
    }

    let revalidate_secs = parse_u64("AETHER_REVALIDATE_SECS", "3600")?;
    let client_timeout_secs = parse_u64("AETHER_CLIENT_TIMEOUT_SECS", "10")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        site_url,
        generator_seed,
        max_count,
        revalidate_secs,
        client_timeout_secs,
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

fn normalize_site_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Some(trimmed.to_string())
    } else {
        None
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
