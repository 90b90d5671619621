use serde::Deserialize;

/// Remote API settings shared by every gateway call
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u32,
}

#[derive(Debug, Deserialize, Clone)]
struct ConfigFile {
    api: ApiConfig,
}

fn default_timeout_ms() -> u32 {
    5000
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "https://localhost:44357/api"
timeout_ms = 5000
"#;

/// Build-time override of the API base URL
const BASE_URL_OVERRIDE: Option<&str> = option_env!("API_BASE_URL");

/// Load configuration
///
/// Search order:
/// 1. `API_BASE_URL` captured at build time
/// 2. Falls back to embedded default config
pub fn load_config() -> ApiConfig {
    resolve(DEFAULT_CONFIG, BASE_URL_OVERRIDE)
}

fn resolve(document: &str, base_url_override: Option<&str>) -> ApiConfig {
    let mut config = match toml::from_str::<ConfigFile>(document) {
        Ok(file) => file.api,
        Err(e) => {
            log::error!("Embedded config is invalid, using built-in values: {}", e);
            ApiConfig {
                base_url: "https://localhost:44357/api".to_string(),
                timeout_ms: default_timeout_ms(),
            }
        }
    };

    match base_url_override.map(str::trim) {
        Some(url) if url.starts_with("http://") || url.starts_with("https://") || url.starts_with('/') => {
            log::info!("Using API base URL from build environment: {}", url);
            config.base_url = url.to_string();
        }
        Some(url) if !url.is_empty() => {
            log::warn!("Ignoring malformed API_BASE_URL: {}", url);
        }
        _ => {}
    }

    config.base_url = config.base_url.trim_end_matches('/').to_string();
    config
}

impl Default for ApiConfig {
    fn default() -> Self {
        resolve(DEFAULT_CONFIG, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = resolve(DEFAULT_CONFIG, None);
        assert_eq!(config.base_url, "https://localhost:44357/api");
        assert_eq!(config.timeout_ms, 5000);
    }

    #[test]
    fn override_replaces_base_url_and_trims_slash() {
        let config = resolve(DEFAULT_CONFIG, Some("http://api.local:8080/api/"));
        assert_eq!(config.base_url, "http://api.local:8080/api");
    }

    #[test]
    fn malformed_or_empty_override_is_ignored() {
        assert_eq!(
            resolve(DEFAULT_CONFIG, Some("not a url")).base_url,
            "https://localhost:44357/api"
        );
        assert_eq!(
            resolve(DEFAULT_CONFIG, Some("  ")).base_url,
            "https://localhost:44357/api"
        );
    }

    #[test]
    fn timeout_defaults_when_absent() {
        let config = resolve("[api]\nbase_url = \"/api\"\n", None);
        assert_eq!(config.base_url, "/api");
        assert_eq!(config.timeout_ms, 5000);
    }

    #[test]
    fn broken_document_falls_back() {
        let config = resolve("[api", None);
        assert_eq!(config.base_url, "https://localhost:44357/api");
    }
}
