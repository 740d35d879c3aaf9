//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and `ORALSCAN_*` environment overrides.
//! Endpoint URLs live here and nowhere else; they are resolved once at
//! startup and handed to the upstream clients.

use oralscan_core::{ClientSettings, ReplyFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub endpoints: EndpointsConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Gateway server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory with the compiled UI (trunk `dist/`). Unset disables
    /// static file serving.
    #[serde(default = "default_static_dir")]
    pub static_dir: Option<String>,

    #[serde(default = "default_max_upload_mb")]
    pub max_upload_mb: usize,

    /// Origins allowed to call the API cross-origin (the trunk dev server).
    /// Empty allows any origin.
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_static_dir() -> Option<String> {
    Some("oralscan-ui/dist".to_string())
}

fn default_max_upload_mb() -> usize {
    16
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:8084".to_string(),
        "http://127.0.0.1:8084".to_string(),
    ]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            max_upload_mb: default_max_upload_mb(),
            cors_origins: default_cors_origins(),
        }
    }
}

impl ServerConfig {
    /// Socket address string to bind
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }
}

/// External service endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointsConfig {
    /// Base URL of the image predictor (`/predict`, `/generate-report`)
    #[serde(default = "default_predictor_url")]
    pub predictor_url: String,

    /// Base URL of the chatbot (`/predict`)
    #[serde(default = "default_chat_url")]
    pub chat_url: String,

    /// Per-request timeout. Unset waits indefinitely.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_predictor_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_chat_url() -> String {
    "http://127.0.0.1:5001".to_string()
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            predictor_url: default_predictor_url(),
            chat_url: default_chat_url(),
            request_timeout_secs: None,
        }
    }
}

/// Display variants passed through to the UI
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_confidence: bool,

    #[serde(default)]
    pub reply_format: ReplyFormat,

    #[serde(default = "default_true")]
    pub report_enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_confidence: true,
            reply_format: ReplyFormat::default(),
            report_enabled: true,
        }
    }
}

impl UiConfig {
    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            show_confidence: self.show_confidence,
            reply_format: self.reply_format,
            report_enabled: self.report_enabled,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `pretty` for development, `json` for production
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// First existing file among the default config locations
    pub fn locate() -> Option<PathBuf> {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("oralscan").join("config.toml")),
            Some(PathBuf::from("/etc/oralscan/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        config_paths.into_iter().flatten().find(|p| p.exists())
    }

    /// Resolve configuration from an explicit path, a default location, or
    /// the environment alone. Returns the file used, if any.
    pub fn resolve(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        let path = explicit.map(Path::to_path_buf).or_else(Self::locate);

        match path {
            Some(path) => Ok((Self::load_with_env(&path)?, Some(path))),
            None => Ok((Self::from_env(), None)),
        }
    }

    /// Apply environment variable overrides to an existing config
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup. Unparseable values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Server overrides
        if let Some(host) = lookup("ORALSCAN_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("ORALSCAN_PORT").and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }
        if let Some(dir) = lookup("ORALSCAN_STATIC_DIR") {
            self.server.static_dir = if dir.is_empty() { None } else { Some(dir) };
        }

        // Endpoint overrides
        if let Some(url) = lookup("ORALSCAN_PREDICTOR_URL") {
            self.endpoints.predictor_url = url;
        }
        if let Some(url) = lookup("ORALSCAN_CHAT_URL") {
            self.endpoints.chat_url = url;
        }
        if let Some(secs) = lookup("ORALSCAN_REQUEST_TIMEOUT_SECS").and_then(|s| s.parse().ok()) {
            self.endpoints.request_timeout_secs = Some(secs);
        }

        // UI overrides
        if let Some(show) = lookup("ORALSCAN_SHOW_CONFIDENCE").and_then(|s| parse_flag(&s)) {
            self.ui.show_confidence = show;
        }
        if let Some(format) = lookup("ORALSCAN_REPLY_FORMAT").and_then(|s| s.parse().ok()) {
            self.ui.reply_format = format;
        }
        if let Some(enabled) = lookup("ORALSCAN_REPORT_ENABLED").and_then(|s| parse_flag(&s)) {
            self.ui.report_enabled = enabled;
        }

        // Logging overrides
        if let Some(level) = lookup("ORALSCAN_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("ORALSCAN_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# OralScan Configuration
#
# Environment variables override these settings:
# - ORALSCAN_HOST, ORALSCAN_PORT, ORALSCAN_STATIC_DIR
# - ORALSCAN_PREDICTOR_URL, ORALSCAN_CHAT_URL, ORALSCAN_REQUEST_TIMEOUT_SECS
# - ORALSCAN_SHOW_CONFIDENCE, ORALSCAN_REPLY_FORMAT, ORALSCAN_REPORT_ENABLED
# - ORALSCAN_LOG_LEVEL, ORALSCAN_LOG_FORMAT

[server]
# Gateway host
host = "0.0.0.0"

# Gateway port
port = 8080

# Compiled UI to serve (output of `trunk build` in oralscan-ui)
static_dir = "oralscan-ui/dist"

# Largest accepted image upload (MB)
max_upload_mb = 16

# Allowed CORS origins (empty = any)
cors_origins = ["http://localhost:8084", "http://127.0.0.1:8084"]

[endpoints]
# Image predictor service
predictor_url = "http://127.0.0.1:5000"

# Chatbot service
chat_url = "http://127.0.0.1:5001"

# Per-request timeout in seconds (omit to wait indefinitely)
# request_timeout_secs = 60

[ui]
# Show the predictor's confidence on the result card
show_confidence = true

# Chat reply rendering: plain or bullets
reply_format = "plain"

# Offer the PDF report download
report_enabled = true

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.addr(), "0.0.0.0:8080");
        assert_eq!(config.endpoints.predictor_url, "http://127.0.0.1:5000");
        assert_eq!(config.endpoints.request_timeout_secs, None);
        assert_eq!(config.ui.client_settings(), ClientSettings::default());
        assert_eq!(config.server.max_upload_bytes(), 16 * 1024 * 1024);
    }

    #[test]
    fn test_huge_upload_limit_saturates() {
        let mut config = Config::default();
        config.server.max_upload_mb = usize::MAX / 2;
        assert_eq!(config.server.max_upload_bytes(), usize::MAX);
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.endpoints.chat_url, "http://127.0.0.1:5001");
        assert_eq!(config.ui.reply_format, ReplyFormat::Plain);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_sections_use_defaults() {
        let config = Config::parse(
            r#"
            [endpoints]
            chat_url = "https://chat.example.org"

            [ui]
            reply_format = "bullets"
            "#,
        )
        .unwrap();

        assert_eq!(config.endpoints.chat_url, "https://chat.example.org");
        assert_eq!(config.endpoints.predictor_url, "http://127.0.0.1:5000");
        assert_eq!(config.ui.reply_format, ReplyFormat::Bullets);
        assert!(config.ui.show_confidence);
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("ORALSCAN_PORT", "9090"),
            ("ORALSCAN_CHAT_URL", "https://bot.example.org"),
            ("ORALSCAN_REQUEST_TIMEOUT_SECS", "30"),
            ("ORALSCAN_SHOW_CONFIDENCE", "false"),
            ("ORALSCAN_REPLY_FORMAT", "bullets"),
            ("ORALSCAN_STATIC_DIR", ""),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.endpoints.chat_url, "https://bot.example.org");
        assert_eq!(config.endpoints.request_timeout_secs, Some(30));
        assert!(!config.ui.show_confidence);
        assert_eq!(config.ui.reply_format, ReplyFormat::Bullets);
        assert_eq!(config.server.static_dir, None);
    }

    #[test]
    fn test_invalid_overrides_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| match key {
            "ORALSCAN_PORT" => Some("not-a-port".to_string()),
            "ORALSCAN_REPLY_FORMAT" => Some("markdown".to_string()),
            "ORALSCAN_REPORT_ENABLED" => Some("maybe".to_string()),
            _ => None,
        });

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.ui.reply_format, ReplyFormat::Plain);
        assert!(config.ui.report_enabled);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 3000\n\n[logging]\nformat = \"json\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_load_errors() {
        let missing = Config::load(Path::new("/nonexistent/oralscan.toml"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();
        assert!(matches!(Config::load(file.path()), Err(ConfigError::Parse { .. })));
    }
}
