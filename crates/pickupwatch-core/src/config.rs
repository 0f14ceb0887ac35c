use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
/// Every variable has a default, so loading only fails on malformed values.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    Ok(AppConfig {
        pickup_base_url: or_default(
            "PICKUPWATCH_PICKUP_BASE_URL",
            "https://www.apple.com/de/shop/retail/pickup-message",
        ),
        part_number: or_default("PICKUPWATCH_PART_NUMBER", "MMEF2ZM/A"),
        product_label: or_default("PICKUPWATCH_PRODUCT_LABEL", "AirPods"),
        product_page_url: or_default(
            "PICKUPWATCH_PRODUCT_PAGE_URL",
            "https://www.apple.com/de/shop/product/MMEF2ZM/A/airpods",
        ),
        location_south: or_default("PICKUPWATCH_LOCATION_SOUTH", "86150"),
        location_north: or_default("PICKUPWATCH_LOCATION_NORTH", "20095"),
        request_timeout_secs: parse_u64("PICKUPWATCH_REQUEST_TIMEOUT_SECS", "30")?,
        user_agent: or_default(
            "PICKUPWATCH_USER_AGENT",
            "pickupwatch/0.1 (availability-check)",
        ),
        log_level: or_default("PICKUPWATCH_LOG_LEVEL", "info"),
    })
}
