//! Configuration management with TOML, environment variables, and CLI overrides.

use crate::ebay::Marketplace;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// eBay application id (`SECURITY-APPNAME`)
    #[serde(default)]
    pub app_id: Option<String>,

    /// Marketplace to search
    #[serde(default)]
    pub marketplace: Marketplace,

    /// Entries per page requested from the service
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Proxy URL (e.g., socks5://host:port)
    #[serde(default)]
    pub proxy: Option<String>,

    /// Request timeout in seconds; the HTTP client default applies when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_page_size() -> u32 {
    20
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_id: None,
            marketplace: Marketplace::Us,
            page_size: default_page_size(),
            proxy: None,
            timeout_secs: None,
            format: OutputFormat::Table,
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        let local_config = Path::new("config.toml");
        if local_config.exists() {
            debug!("Found config.toml in current directory");
            return Self::from_file(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("ebay-finder").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides.
    pub fn with_env(mut self) -> Self {
        if let Ok(app_id) = std::env::var("EBAY_APP_ID") {
            if !app_id.is_empty() {
                self.app_id = Some(app_id);
            }
        }

        if let Ok(global_id) = std::env::var("EBAY_GLOBAL_ID") {
            if let Ok(m) = global_id.parse() {
                self.marketplace = m;
            }
        }

        if let Ok(proxy) = std::env::var("EBAY_PROXY") {
            self.proxy = Some(proxy);
        }

        self
    }

    /// Returns the configured request timeout.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
    Dump,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "dump" | "debug" => Ok(OutputFormat::Dump),
            _ => Err(format!("Unknown format: {}. Use: table, json, csv, dump", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Dump => write!(f, "dump"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.app_id.is_none());
        assert_eq!(config.marketplace, Marketplace::Us);
        assert_eq!(config.page_size, 20);
        assert!(config.proxy.is_none());
        assert!(config.timeout_secs.is_none());
        assert!(config.timeout().is_none());
        assert_eq!(config.format, OutputFormat::Table);
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("dump".parse::<OutputFormat>().unwrap(), OutputFormat::Dump);
        assert_eq!("debug".parse::<OutputFormat>().unwrap(), OutputFormat::Dump);

        let err = "markdown".parse::<OutputFormat>().unwrap_err();
        assert!(err.contains("Unknown format"));
        assert!(err.contains("table, json, csv, dump"));
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Table.to_string(), "table");
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
        assert_eq!(OutputFormat::Dump.to_string(), "dump");
    }

    #[test]
    fn test_config_from_toml() {
        let toml = r#"
            app_id = "MyApp-1234"
            marketplace = "EBAY-DE"
            page_size = 50
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.app_id.as_deref(), Some("MyApp-1234"));
        assert_eq!(config.marketplace, Marketplace::De);
        assert_eq!(config.page_size, 50);
        assert_eq!(config.format, OutputFormat::Table);
    }

    #[test]
    fn test_config_from_toml_all_fields() {
        let toml = r#"
            app_id = "MyApp-1234"
            marketplace = "EBAY-IT"
            page_size = 100
            proxy = "socks5://localhost:1080"
            timeout_secs = 15
            format = "json"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.marketplace, Marketplace::It);
        assert_eq!(config.page_size, 100);
        assert_eq!(config.proxy, Some("socks5://localhost:1080".to_string()));
        assert_eq!(config.timeout(), Some(Duration::from_secs(15)));
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_config_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            marketplace = "EBAY-FR"
            page_size = 10
            "#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.marketplace, Marketplace::Fr);
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn test_config_from_file_not_found() {
        let result = Config::from_file("/nonexistent/path/config.toml");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_config_from_file_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml {{{{").unwrap();

        let err = Config::from_file(file.path()).unwrap_err().to_string();
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_config_load_explicit_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"marketplace = "EBAY-ES""#).unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.marketplace, Marketplace::Es);
    }

    #[test]
    fn test_config_with_env() {
        let orig_app = std::env::var("EBAY_APP_ID").ok();
        let orig_global = std::env::var("EBAY_GLOBAL_ID").ok();
        let orig_proxy = std::env::var("EBAY_PROXY").ok();

        std::env::set_var("EBAY_APP_ID", "EnvApp-1");
        std::env::set_var("EBAY_GLOBAL_ID", "EBAY-IT");
        std::env::set_var("EBAY_PROXY", "http://proxy:8080");

        let config = Config::new().with_env();
        assert_eq!(config.app_id.as_deref(), Some("EnvApp-1"));
        assert_eq!(config.marketplace, Marketplace::It);
        assert_eq!(config.proxy, Some("http://proxy:8080".to_string()));

        std::env::set_var("EBAY_GLOBAL_ID", "EBAY-XX");
        let config = Config::new().with_env();
        assert_eq!(config.marketplace, Marketplace::Us);

        match orig_app {
            Some(v) => std::env::set_var("EBAY_APP_ID", v),
            None => std::env::remove_var("EBAY_APP_ID"),
        }
        match orig_global {
            Some(v) => std::env::set_var("EBAY_GLOBAL_ID", v),
            None => std::env::remove_var("EBAY_GLOBAL_ID"),
        }
        match orig_proxy {
            Some(v) => std::env::set_var("EBAY_PROXY", v),
            None => std::env::remove_var("EBAY_PROXY"),
        }
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config {
            app_id: Some("MyApp".to_string()),
            marketplace: Marketplace::Es,
            page_size: 75,
            proxy: None,
            timeout_secs: Some(30),
            format: OutputFormat::Csv,
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.app_id, config.app_id);
        assert_eq!(parsed.marketplace, config.marketplace);
        assert_eq!(parsed.page_size, config.page_size);
        assert_eq!(parsed.timeout_secs, config.timeout_secs);
        assert_eq!(parsed.format, config.format);
    }
}
