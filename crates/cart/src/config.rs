//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `MAFIA_CART_DIR` - Directory for saved carts (default: .mafia)
//! - `MAFIA_CART_KEY` - Storage key for the cart snapshot (default: mafia-cart)
//! - `MAFIA_CURRENCY_SYMBOL` - Currency symbol for display (default: ₽)

use std::path::PathBuf;

use thiserror::Error;

use crate::snapshot::DEFAULT_KEY;
use crate::storage::validate_key;
use crate::view::DEFAULT_CURRENCY_SYMBOL;

const DEFAULT_CART_DIR: &str = ".mafia";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
    /// Directory the file store writes snapshots to
    pub storage_dir: PathBuf,
    /// Key the cart snapshot is stored under
    pub storage_key: String,
    /// Symbol appended to formatted prices
    pub currency_symbol: String,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_CART_DIR),
            storage_key: DEFAULT_KEY.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build configuration from a variable lookup function.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unusable value.
    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let storage_dir = PathBuf::from(
            get("MAFIA_CART_DIR").unwrap_or_else(|| DEFAULT_CART_DIR.to_string()),
        );
        if storage_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "MAFIA_CART_DIR".to_string(),
                "must not be empty".to_string(),
            ));
        }

        let storage_key = get("MAFIA_CART_KEY").unwrap_or_else(|| DEFAULT_KEY.to_string());
        validate_key(&storage_key).map_err(|e| {
            ConfigError::InvalidEnvVar("MAFIA_CART_KEY".to_string(), e.to_string())
        })?;

        let currency_symbol = get("MAFIA_CURRENCY_SYMBOL")
            .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string())
            .trim()
            .to_string();
        if currency_symbol.is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "MAFIA_CURRENCY_SYMBOL".to_string(),
                "must not be empty".to_string(),
            ));
        }

        Ok(Self {
            storage_dir,
            storage_key,
            currency_symbol,
        })
    }
}
