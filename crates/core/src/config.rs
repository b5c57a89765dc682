//! Runtime configuration
//!
//! Settings come from an optional `champa.toml` (or the file named by
//! `CHAMPA_CONFIG`) and are then overridden by `CHAMPA_*` environment
//! variables. Bad environment values are logged and ignored.

use crate::error::{ShopError, ShopResult};
use serde::{Deserialize, Serialize};
use std::{
    env,
    fmt::Display,
    path::{Path, PathBuf},
    str::FromStr,
};
use tracing::{debug, info, warn};

/// Default config file looked up in the working directory
pub const CONFIG_FILE: &str = "champa.toml";

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "CHAMPA_CONFIG";

/// Storefront configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// Origin of the REST backend
    pub base_url: String,
    /// Directory holding `storage.json`
    pub data_dir: PathBuf,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Rows per page in the admin tables
    pub admin_page_size: usize,
    /// Products shown before the reveal-all control
    pub catalog_initial_count: usize,
    /// Hero carousel auto-advance period
    pub hero_interval_ms: u64,
    /// Delay before an auth failure sends the user to the login page
    pub auth_redirect_delay_ms: u64,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            data_dir: default_data_dir(),
            request_timeout_secs: 30,
            admin_page_size: 10,
            catalog_initial_count: 10,
            hero_interval_ms: 3500,
            auth_redirect_delay_ms: 2000,
        }
    }
}

impl ShopConfig {
    /// Load configuration from the default file (if any) and the environment
    pub fn load() -> ShopResult<Self> {
        let path = env::var(CONFIG_ENV)
            .map(PathBuf::from)
            .ok()
            .or_else(|| {
                let local = PathBuf::from(CONFIG_FILE);
                local.exists().then_some(local)
            });

        let mut config = match path {
            Some(path) => Self::from_file(&path)?,
            None => {
                debug!("No config file found, using defaults");
                Self::default()
            }
        };
        config.apply_env(|key| env::var(key).ok());
        Ok(config)
    }

    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> ShopResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            ShopError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config = Self::from_toml(&text)
            .map_err(|e| ShopError::Config(format!("{}: {e}", path.display())))?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse TOML text; missing keys keep their defaults
    pub fn from_toml(text: &str) -> ShopResult<Self> {
        toml::from_str(text).map_err(|e| ShopError::Config(e.to_string()))
    }

    /// Apply `CHAMPA_*` overrides read through `lookup`
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("CHAMPA_BASE_URL") {
            self.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(dir) = lookup("CHAMPA_DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }
        try_override(&lookup, "CHAMPA_PAGE_SIZE", &mut self.admin_page_size);
        try_override(&lookup, "CHAMPA_TIMEOUT_SECS", &mut self.request_timeout_secs);
    }

    /// Path of the persistent client store
    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join("storage.json")
    }

    /// Request timeout as a duration
    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.request_timeout_secs)
    }
}

fn try_override<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, slot: &mut T)
where
    T: FromStr,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        return;
    };
    match raw.trim().parse() {
        Ok(value) => *slot = value,
        Err(e) => warn!("Invalid {key} value {raw:?}: {e}, keeping current setting"),
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("champa")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ShopConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.admin_page_size, 10);
        assert_eq!(config.catalog_initial_count, 10);
        assert_eq!(config.hero_interval_ms, 3500);
        assert!(config.storage_path().ends_with("champa/storage.json"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ShopConfig::from_toml("base_url = \"https://shop.example\"\nadmin_page_size = 25\n").unwrap();
        assert_eq!(config.base_url, "https://shop.example");
        assert_eq!(config.admin_page_size, 25);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = ShopConfig::from_toml("admin_page_size = \"many\"").unwrap_err();
        assert!(matches!(err, ShopError::Config(_)));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ShopConfig::default();
        config.apply_env(env_of(&[
            ("CHAMPA_BASE_URL", "http://10.0.0.2:8080/"),
            ("CHAMPA_DATA_DIR", "/tmp/champa-test"),
            ("CHAMPA_PAGE_SIZE", "20"),
        ]));
        assert_eq!(config.base_url, "http://10.0.0.2:8080");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/champa-test"));
        assert_eq!(config.admin_page_size, 20);
    }

    #[test]
    fn test_bad_env_value_is_ignored() {
        let mut config = ShopConfig::default();
        config.apply_env(env_of(&[("CHAMPA_TIMEOUT_SECS", "soon")]));
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("champa.toml");
        std::fs::write(&path, "catalog_initial_count = 4\n").unwrap();
        let config = ShopConfig::from_file(&path).unwrap();
        assert_eq!(config.catalog_initial_count, 4);

        let missing = ShopConfig::from_file(&dir.path().join("nope.toml"));
        assert!(matches!(missing, Err(ShopError::Config(_))));
    }
}
