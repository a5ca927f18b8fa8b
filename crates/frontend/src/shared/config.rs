//! Client configuration.
//!
//! The defaults are embedded in the bundle; a deployment overrides them by
//! editing `DEFAULT_CONFIG` at build time.

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Explicit base URL; when empty the base is derived from the window location.
    #[serde(default)]
    pub base_url: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    pub storage_key: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
port = 3000

[session]
storage_key = "kiteManager_session"
"#;

static CONFIG: Lazy<AppConfig> = Lazy::new(|| match parse_config(DEFAULT_CONFIG) {
    Ok(config) => config,
    Err(e) => {
        log::error!("embedded config is invalid, using built-in values: {}", e);
        AppConfig {
            api: ApiConfig {
                base_url: String::new(),
                port: 3000,
            },
            session: SessionConfig {
                storage_key: "kiteManager_session".to_string(),
            },
        }
    }
});

pub fn parse_config(contents: &str) -> Result<AppConfig, String> {
    toml::from_str(contents).map_err(|e| format!("Failed to parse config: {}", e))
}

pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.port, 3000);
        assert!(config.api.base_url.is_empty());
        assert_eq!(config.session.storage_key, "kiteManager_session");
    }

    #[test]
    fn test_base_url_is_optional() {
        let config = parse_config(
            "[api]\nport = 8080\n\n[session]\nstorage_key = \"k\"\n",
        )
        .unwrap();
        assert_eq!(config.api.port, 8080);
        assert_eq!(config.api.base_url, "");
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        assert!(parse_config("[api]\nport = \"x\"").is_err());
    }
}
