//! Configuration loaded from environment variables.

use std::path::PathBuf;
use std::time::Duration;

use crate::storage::DEFAULT_CART_KEY;

/// Cart system configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `CART_API_URL` — storefront API base URL (default: `"http://localhost:3333"`)
/// - `CART_STORAGE_DIR` — directory of the durable slot (default: `".rocket-cart"`)
/// - `CART_STORAGE_KEY` — key the cart is stored under (default: `"cart"`)
/// - `CART_REQUEST_TIMEOUT_MS` — lookup timeout in milliseconds (default: `5000`)
/// - `CART_BUFFER_SIZE` — request queue length of the cart service (default: `32`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
#[derive(Debug, Clone, PartialEq)]
pub struct CartConfig {
    pub api_url: String,
    pub storage_dir: PathBuf,
    pub storage_key: String,
    pub request_timeout: Duration,
    pub buffer_size: usize,
    pub log_level: String,
}

impl CartConfig {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            api_url: lookup("CART_API_URL").unwrap_or(defaults.api_url),
            storage_dir: lookup("CART_STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.storage_dir),
            storage_key: lookup("CART_STORAGE_KEY").unwrap_or(defaults.storage_key),
            request_timeout: lookup("CART_REQUEST_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.request_timeout),
            buffer_size: lookup("CART_BUFFER_SIZE")
                .and_then(|v| v.parse().ok())
                .filter(|&size: &usize| size > 0)
                .unwrap_or(defaults.buffer_size),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
        }
    }
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3333".to_string(),
            storage_dir: PathBuf::from(".rocket-cart"),
            storage_key: DEFAULT_CART_KEY.to_string(),
            request_timeout: Duration::from_millis(5000),
            buffer_size: 32,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_values() {
        let config = CartConfig::default();
        assert_eq!(config.api_url, "http://localhost:3333");
        assert_eq!(config.storage_dir, PathBuf::from(".rocket-cart"));
        assert_eq!(config.storage_key, "cart");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.buffer_size, 32);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("CART_API_URL", "http://api.test"),
            ("CART_STORAGE_DIR", "/tmp/carts"),
            ("CART_STORAGE_KEY", "guest"),
            ("CART_REQUEST_TIMEOUT_MS", "250"),
            ("CART_BUFFER_SIZE", "8"),
            ("RUST_LOG", "debug"),
        ]);
        let config = CartConfig::from_lookup(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.api_url, "http://api.test");
        assert_eq!(config.storage_dir, PathBuf::from("/tmp/carts"));
        assert_eq!(config.storage_key, "guest");
        assert_eq!(config.request_timeout, Duration::from_millis(250));
        assert_eq!(config.buffer_size, 8);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_unparseable_numbers_fall_back() {
        let config = CartConfig::from_lookup(|name| match name {
            "CART_REQUEST_TIMEOUT_MS" => Some("soon".to_string()),
            "CART_BUFFER_SIZE" => Some("0".to_string()),
            _ => None,
        });

        assert_eq!(config.request_timeout, Duration::from_millis(5000));
        assert_eq!(config.buffer_size, 32);
    }
}
