use crate::app_config::AppConfig;
use crate::ConfigError;

/// Environment variables recognized for the shopping-search credential, in
/// precedence order. The first non-empty value wins; when none is set the
/// primary source is disabled (not an error).
const SHOPPING_KEY_VARS: &[&str] = &[
    "PRICESCOUT_SHOPPING_API_KEY",
    "SERPAPI_API_KEY",
    "SERPAPI_KEY",
];

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if an env var holds an unparseable value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if an env var holds an unparseable value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup — no
/// `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let shopping_api_key = SHOPPING_KEY_VARS.iter().find_map(|var| {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    });

    let bind_addr = parse_addr("PRICESCOUT_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("PRICESCOUT_LOG_LEVEL", "info");
    let shopping_base_url = or_default(
        "PRICESCOUT_SHOPPING_BASE_URL",
        "https://serpapi.com/search.json",
    );
    let catalog_base_url = or_default("PRICESCOUT_CATALOG_BASE_URL", "https://dummyjson.com");
    let cache_ttl_secs = parse_u64("PRICESCOUT_CACHE_TTL_SECS", "300")?;
    let request_timeout_secs = parse_u64("PRICESCOUT_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("PRICESCOUT_USER_AGENT", "pricescout/0.1 (offer-aggregation)");

    Ok(AppConfig {
        bind_addr,
        log_level,
        shopping_api_key,
        shopping_base_url,
        catalog_base_url,
        cache_ttl_secs,
        request_timeout_secs,
        user_agent,
    })
}
