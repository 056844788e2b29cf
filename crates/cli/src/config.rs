//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `DELIVEBOO_CART_DIR` - Directory holding the stored cart (default: .deliveboo)
//! - `DELIVEBOO_CART_KEY` - Storage key for the cart (default: cart)
//! - `DELIVEBOO_STORAGE_QUOTA_BYTES` - Maximum bytes the storage directory may hold
//! - `DELIVEBOO_LOG_FORMAT` - `pretty` or `json` (default: pretty)
//! - `RUST_LOG` - Log filter (default: info)

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

const DEFAULT_CART_DIR: &str = ".deliveboo";
const DEFAULT_CART_KEY: &str = "cart";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set but its value cannot be parsed (name, reason).
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("expected `pretty` or `json`, got `{other}`")),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Directory backing the cart storage
    pub cart_dir: PathBuf,
    /// Key the cart is stored under
    pub cart_key: String,
    /// Optional storage quota in bytes
    pub storage_quota: Option<u64>,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            cart_dir: PathBuf::from(DEFAULT_CART_DIR),
            cart_key: DEFAULT_CART_KEY.to_owned(),
            storage_quota: None,
            log_format: LogFormat::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let cart_dir = lookup("DELIVEBOO_CART_DIR").map_or(defaults.cart_dir, PathBuf::from);
        let cart_key = lookup("DELIVEBOO_CART_KEY").unwrap_or(defaults.cart_key);
        let storage_quota = lookup("DELIVEBOO_STORAGE_QUOTA_BYTES")
            .map(|raw| parse_var("DELIVEBOO_STORAGE_QUOTA_BYTES", &raw))
            .transpose()?;
        let log_format = lookup("DELIVEBOO_LOG_FORMAT")
            .map(|raw| parse_var("DELIVEBOO_LOG_FORMAT", &raw))
            .transpose()?
            .unwrap_or_default();

        if cart_key.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "DELIVEBOO_CART_KEY".to_string(),
                "must not be empty".to_string(),
            ));
        }

        Ok(Self {
            cart_dir,
            cart_key,
            storage_quota,
            log_format,
        })
    }
}

/// Parse a variable, naming it in the error.
fn parse_var<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}
