//! Configuration commands for the collection API endpoint.
//!
//! - `config show`: Display current configuration
//! - `config get`: Print a single value
//! - `config set`: Set a value

use owo_colors::OwoColorize;
use url::Url;

use crate::config::Config;
use crate::error::{FunnelboardError, Result};

const VALID_KEYS: &str = "api.base_url, api.token, api.timeout";

/// Mask a sensitive value by showing only the first 2 and last 2 characters
fn mask_sensitive_value(value: &str) -> String {
    let char_count = value.chars().count();
    if char_count > 4 {
        let first: String = value.chars().take(2).collect();
        let last: String = value.chars().skip(char_count - 2).collect();
        format!("{first}...{last}")
    } else {
        "****".to_string()
    }
}

/// Show current configuration
pub fn cmd_config_show() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Configuration:".cyan().bold());
    println!();
    match config.api_base_url() {
        Some(url) => println!("{}: {url}", "api.base_url".cyan()),
        None => println!("{}: {}", "api.base_url".cyan(), "not configured".dimmed()),
    }
    match config.api_token() {
        Some(token) => println!("{}: {}", "api.token".cyan(), mask_sensitive_value(&token)),
        None => println!("{}: {}", "api.token".cyan(), "not configured".dimmed()),
    }
    println!("{}: {}s", "api.timeout".cyan(), config.api_timeout);
    println!();
    println!(
        "{}: {}",
        "config_file".cyan(),
        Config::path().to_string_lossy()
    );
    Ok(())
}

/// Print a single configuration value
pub fn cmd_config_get(key: &str) -> Result<()> {
    let config = Config::load()?;
    match key {
        "api.base_url" => match config.api_base_url() {
            Some(url) => println!("{url}"),
            None => println!("{}", "not configured".dimmed()),
        },
        "api.token" => match config.api_token() {
            Some(token) => println!("{}", mask_sensitive_value(&token)),
            None => println!("{}", "not configured".dimmed()),
        },
        "api.timeout" => println!("{}", config.api_timeout),
        _ => {
            return Err(FunnelboardError::Config(format!(
                "unknown config key '{key}' (valid: {VALID_KEYS})"
            )));
        }
    }
    Ok(())
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    match key {
        "api.base_url" => {
            Url::parse(value)?;
            config.set_api_base_url(value.to_string());
        }
        "api.token" => {
            config.set_api_token(value.to_string())?;
        }
        "api.timeout" => {
            config.api_timeout = value.parse().map_err(|_| {
                FunnelboardError::Config(format!("api.timeout must be a number of seconds, got '{value}'"))
            })?;
        }
        _ => {
            return Err(FunnelboardError::Config(format!(
                "unknown config key '{key}' (valid: {VALID_KEYS})"
            )));
        }
    }
    config.save()?;
    println!("{} {key}", "Set".green());
    Ok(())
}
