//! Configuration module for inquirydesk.

use serde::Deserialize;
use std::path::Path;

use crate::{DeskError, Result};

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// CORS allowed origins. Empty means permissive development mode.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![],
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_db_path")]
    pub path: String,
}

fn default_db_path() -> String {
    "data/inquirydesk.db".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file. Empty disables file output.
    #[serde(default)]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: String::new(),
        }
    }
}

/// Administrator authentication configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// JWT secret key used to sign session tokens.
    #[serde(default)]
    pub jwt_secret: String,
    /// Whether the registration endpoint accepts a first administrator.
    #[serde(default = "default_registration_enabled")]
    pub registration_enabled: bool,
}

fn default_registration_enabled() -> bool {
    true
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            registration_enabled: default_registration_enabled(),
        }
    }
}

/// Outbound mail configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MailConfig {
    /// Whether to deliver through the mail provider. When false,
    /// notifications are only logged.
    #[serde(default)]
    pub enabled: bool,
    /// Mail provider HTTP endpoint.
    #[serde(default = "default_mail_api_url")]
    pub api_url: String,
    /// Mail provider API key.
    #[serde(default)]
    pub api_key: String,
    /// Sender address.
    #[serde(default = "default_mail_from")]
    pub from: String,
    /// Address that receives new-inquiry alerts.
    #[serde(default)]
    pub admin_recipient: String,
    /// Brand name used in notification subjects and signatures.
    #[serde(default = "default_brand_name")]
    pub brand_name: String,
    /// Total request timeout in seconds.
    #[serde(default = "default_mail_timeout")]
    pub timeout_secs: u64,
}

fn default_mail_api_url() -> String {
    "https://api.resend.com/emails".to_string()
}

fn default_mail_from() -> String {
    "VJ Events <onboarding@resend.dev>".to_string()
}

fn default_brand_name() -> String {
    "VJ Events".to_string()
}

fn default_mail_timeout() -> u64 {
    10
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_url: default_mail_api_url(),
            api_key: String::new(),
            from: default_mail_from(),
            admin_recipient: String::new(),
            brand_name: default_brand_name(),
            timeout_secs: default_mail_timeout(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Authentication configuration.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Mail configuration.
    #[serde(default)]
    pub mail: MailConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(DeskError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| DeskError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `INQUIRYDESK_JWT_SECRET`
    /// - `INQUIRYDESK_MAIL_API_KEY`
    /// - `INQUIRYDESK_ADMIN_EMAIL`
    /// - `INQUIRYDESK_PORT`
    ///
    /// Empty values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Some(secret) = non_empty_env("INQUIRYDESK_JWT_SECRET") {
            self.auth.jwt_secret = secret;
        }
        if let Some(key) = non_empty_env("INQUIRYDESK_MAIL_API_KEY") {
            self.mail.api_key = key;
        }
        if let Some(recipient) = non_empty_env("INQUIRYDESK_ADMIN_EMAIL") {
            self.mail.admin_recipient = recipient;
        }
        if let Some(port) = non_empty_env("INQUIRYDESK_PORT") {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => tracing::warn!(value = %port, "Ignoring invalid INQUIRYDESK_PORT"),
            }
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if:
    /// - the JWT secret is not set
    /// - mail is enabled without an API key or admin recipient
    /// - the mail API URL is not an http(s) URL
    pub fn validate(&self) -> Result<()> {
        if self.auth.jwt_secret.is_empty() {
            return Err(DeskError::Config(
                "jwt_secret is not set. \
                 Set it in config.toml or via INQUIRYDESK_JWT_SECRET environment variable."
                    .to_string(),
            ));
        }

        match url::Url::parse(&self.mail.api_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(DeskError::Config(format!(
                    "unsupported mail api_url scheme: {}",
                    url.scheme()
                )))
            }
            Err(e) => return Err(DeskError::Config(format!("invalid mail api_url: {e}"))),
        }

        if self.mail.enabled {
            if self.mail.api_key.is_empty() {
                return Err(DeskError::Config(
                    "mail is enabled but api_key is not set".to_string(),
                ));
            }
            if self.mail.admin_recipient.trim().is_empty() {
                return Err(DeskError::Config(
                    "mail is enabled but admin_recipient is not set".to_string(),
                ));
            }
        }
        Ok(())
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert!(config.server.cors_origins.is_empty());

        assert_eq!(config.database.path, "data/inquirydesk.db");

        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file.is_empty());

        assert!(config.auth.jwt_secret.is_empty());
        assert!(config.auth.registration_enabled);

        assert!(!config.mail.enabled);
        assert_eq!(config.mail.api_url, "https://api.resend.com/emails");
        assert_eq!(config.mail.brand_name, "VJ Events");
        assert_eq!(config.mail.timeout_secs, 10);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[server]
host = "127.0.0.1"
port = 8080
cors_origins = ["http://localhost:5173"]

[database]
path = "custom/desk.db"

[logging]
level = "debug"
file = "logs/desk.log"

[auth]
jwt_secret = "test-secret-key"
registration_enabled = false

[mail]
enabled = true
api_url = "http://localhost:9000/emails"
api_key = "re_test"
from = "Desk <desk@example.com>"
admin_recipient = "owner@example.com"
brand_name = "Desk"
timeout_secs = 3
"#;

        let config = Config::parse(toml).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.cors_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.database.path, "custom/desk.db");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file, "logs/desk.log");
        assert_eq!(config.auth.jwt_secret, "test-secret-key");
        assert!(!config.auth.registration_enabled);
        assert!(config.mail.enabled);
        assert_eq!(config.mail.api_url, "http://localhost:9000/emails");
        assert_eq!(config.mail.api_key, "re_test");
        assert_eq!(config.mail.from, "Desk <desk@example.com>");
        assert_eq!(config.mail.admin_recipient, "owner@example.com");
        assert_eq!(config.mail.brand_name, "Desk");
        assert_eq!(config.mail.timeout_secs, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_empty_config() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.database.path, "data/inquirydesk.db");
    }

    #[test]
    fn test_parse_invalid_config() {
        let result = Config::parse("this is not valid toml [[[");
        match result {
            Err(DeskError::Config(msg)) => assert!(msg.contains("config parse error")),
            other => panic!("Expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = Config::load("nonexistent.toml");
        assert!(matches!(result, Err(DeskError::Io(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = 7000\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.server.port, 7000);
    }

    #[test]
    fn test_apply_env_overrides() {
        let original = std::env::var("INQUIRYDESK_MAIL_API_KEY").ok();

        std::env::set_var("INQUIRYDESK_MAIL_API_KEY", "env-key");
        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config.mail.api_key, "env-key");

        std::env::set_var("INQUIRYDESK_MAIL_API_KEY", "");
        let mut config = Config::default();
        config.mail.api_key = "original".to_string();
        config.apply_env_overrides();
        assert_eq!(config.mail.api_key, "original");

        match original {
            Some(val) => std::env::set_var("INQUIRYDESK_MAIL_API_KEY", val),
            None => std::env::remove_var("INQUIRYDESK_MAIL_API_KEY"),
        }
    }

    #[test]
    fn test_validate_missing_secret() {
        let config = Config::default();
        match config.validate() {
            Err(DeskError::Config(msg)) => assert!(msg.contains("jwt_secret")),
            other => panic!("Expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_mail_enabled_without_key() {
        let mut config = Config::default();
        config.auth.jwt_secret = "secret".to_string();
        config.mail.enabled = true;
        config.mail.admin_recipient = "owner@example.com".to_string();

        match config.validate() {
            Err(DeskError::Config(msg)) => assert!(msg.contains("api_key")),
            other => panic!("Expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_mail_enabled_without_recipient() {
        let mut config = Config::default();
        config.auth.jwt_secret = "secret".to_string();
        config.mail.enabled = true;
        config.mail.api_key = "key".to_string();

        match config.validate() {
            Err(DeskError::Config(msg)) => assert!(msg.contains("admin_recipient")),
            other => panic!("Expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_bad_api_url() {
        let mut config = Config::default();
        config.auth.jwt_secret = "secret".to_string();
        config.mail.api_url = "ftp://mail.example.com".to_string();
        assert!(config.validate().is_err());

        config.mail.api_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_mail_disabled() {
        let mut config = Config::default();
        config.auth.jwt_secret = "secret".to_string();
        assert!(config.validate().is_ok());
    }
}
