use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid. No variable is
/// hard-required: supplier credentials are optional by design and their
/// absence is reported per-call, not at startup.
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
/// Returns `ConfigError` if a present value cannot be parsed.
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

    let env = parse_environment(&or_default("STOREFORGE_ENV", "development"));
    let bind_addr = parse_addr("STOREFORGE_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("STOREFORGE_LOG_LEVEL", "info");

    let cj_access_token = lookup("CJ_ACCESS_TOKEN").ok();
    let eprolo_api_key = lookup("EPROLO_API_KEY").ok();

    let cj_api_base = or_default(
        "STOREFORGE_CJ_API_BASE",
        "https://developers.cjdropshipping.com/api2.0/v1",
    );
    let eprolo_api_base = or_default("STOREFORGE_EPROLO_API_BASE", "https://api.eprolo.com/api/v1");
    let default_supplier = or_default("STOREFORGE_DEFAULT_SUPPLIER", "cj");

    let supplier_timeout_secs = parse_u64("STOREFORGE_SUPPLIER_TIMEOUT_SECS", "30")?;
    let supplier_user_agent = or_default("STOREFORGE_SUPPLIER_USER_AGENT", "storeforge/0.1 (catalog)");

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        cj_access_token,
        eprolo_api_key,
        cj_api_base,
        eprolo_api_base,
        default_supplier,
        supplier_timeout_secs,
        supplier_user_agent,
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
