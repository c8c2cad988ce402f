//! CLI configuration.

use anyhow::{Context, Result};
use pocketshop_commerce::search::PAGE_SIZE;
use pocketshop_data::DEFAULT_BASE_URL;
use pocketshop_observability::{LogFormat, LogLevel};
use serde::{Deserialize, Serialize};

/// File names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["pocketshop.toml", ".pocketshop.toml", "pocketshop.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShopConfig {
    /// Product API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Catalog screen settings.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ShopConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// Check the config for values that cannot work.
    ///
    /// Returns `(errors, warnings)`.
    pub fn validate(&self) -> (Vec<String>, Vec<String>) {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        let base_url = self.api.base_url.trim();
        if base_url.is_empty() {
            errors.push("api.base_url is required".to_string());
        } else if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            errors.push(format!("api.base_url '{}' must be an http(s) URL", base_url));
        } else if base_url.starts_with("http://") {
            warnings.push("api.base_url uses plain http".to_string());
        }

        if self.catalog.page_size == 0 {
            errors.push("catalog.page_size must be at least 1".to_string());
        } else if self.catalog.page_size != PAGE_SIZE {
            warnings.push(format!(
                "catalog.page_size is {} (storefront default is {})",
                self.catalog.page_size, PAGE_SIZE
            ));
        }

        if let Some(fixture) = &self.catalog.fixture {
            if !std::path::Path::new(fixture).exists() {
                errors.push(format!("catalog.fixture '{}' does not exist", fixture));
            }
        }

        (errors, warnings)
    }
}

/// Product API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API root; products are fetched from `{base_url}/products`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Catalog screen settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Rows revealed per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Read products from this JSON file instead of the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixture: Option<String>,
}

fn default_page_size() -> usize {
    PAGE_SIZE
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            fixture: None,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: LogLevel,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> LogLevel {
    LogLevel::Warn
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

/// Generate a default pocketshop.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Pocketshop configuration

[api]
base_url = "{base_url}"

[catalog]
page_size = {page_size}
# fixture = "products.json"

[logging]
level = "warn"
format = "human"
"#,
        base_url = DEFAULT_BASE_URL,
        page_size = PAGE_SIZE
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config: ShopConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.catalog.page_size, 10);
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert_eq!(config.logging.format, LogFormat::Human);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: ShopConfig = toml::from_str("[logging]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.catalog.page_size, PAGE_SIZE);
        assert!(config.catalog.fixture.is_none());
    }

    #[test]
    fn test_save_and_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pocketshop.json");
        let path = path.to_str().unwrap();

        let mut config = ShopConfig::default();
        config.api.base_url = "https://shop.example".to_string();
        config.save(path).unwrap();

        let loaded = ShopConfig::load(path).unwrap();
        assert_eq!(loaded.api.base_url, "https://shop.example");
    }

    #[test]
    fn test_validate() {
        let mut config = ShopConfig::default();
        let (errors, warnings) = config.validate();
        assert!(errors.is_empty());
        assert!(warnings.is_empty());

        config.api.base_url = "ftp://nope".to_string();
        config.catalog.page_size = 0;
        let (errors, _) = config.validate();
        assert_eq!(errors.len(), 2);
    }
}
