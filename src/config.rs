use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_CATEGORIES_PER_PAGE, DEFAULT_POSTS_PER_PAGE, MAX_PER_PAGE,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
    #[error("failed to parse {name} as integer: {source}")]
    ParseInt {
        name: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Viewer configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // WordPress API
    pub base_url: String,
    pub posts_per_page: u32,
    pub categories_per_page: u32,

    // HTTP
    pub http_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: env_or_default("WP_BASE_URL", DEFAULT_BASE_URL),
            posts_per_page: parse_env_u32("WP_POSTS_PER_PAGE", DEFAULT_POSTS_PER_PAGE)?,
            categories_per_page: parse_env_u32(
                "WP_CATEGORIES_PER_PAGE",
                DEFAULT_CATEGORIES_PER_PAGE,
            )?,
            http_timeout: Duration::from_secs(parse_env_u64("HTTP_TIMEOUT_SECS", 30)?),
        })
    }

    /// Default configuration pointed at the given site.
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            posts_per_page: DEFAULT_POSTS_PER_PAGE,
            categories_per_page: DEFAULT_CATEGORIES_PER_PAGE,
            http_timeout: Duration::from_secs(30),
        }
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match Url::parse(&self.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(ConfigError::InvalidValue {
                    name: "WP_BASE_URL".to_string(),
                    message: format!("unsupported scheme {}", url.scheme()),
                });
            }
            Err(e) => {
                return Err(ConfigError::InvalidValue {
                    name: "WP_BASE_URL".to_string(),
                    message: e.to_string(),
                });
            }
        }
        check_page_size("WP_POSTS_PER_PAGE", self.posts_per_page)?;
        check_page_size("WP_CATEGORIES_PER_PAGE", self.categories_per_page)?;
        if self.http_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                name: "HTTP_TIMEOUT_SECS".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// WordPress rejects `per_page` outside `1..=100`.
fn check_page_size(name: &str, value: u32) -> Result<(), ConfigError> {
    if value == 0 || value > MAX_PER_PAGE {
        return Err(ConfigError::InvalidValue {
            name: name.to_string(),
            message: format!("must be between 1 and {MAX_PER_PAGE}"),
        });
    }
    Ok(())
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_u32(name: &str, default: u32) -> Result<u32, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}
