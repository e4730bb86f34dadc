// File: src/config.rs
// Purpose: Configuration parsing from relay.toml with environment overrides

use anyhow::{bail, Context, Result};
use contact_validation::is_valid_email;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable naming the config file
pub const CONFIG_PATH_VAR: &str = "RELAY_CONFIG";

/// Paths served by the page and health routes
pub const RESERVED_PATHS: &[&str] = &["/", "/health"];

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub smtp: SmtpConfig,

    #[serde(default)]
    pub mail: MailConfig,

    #[serde(default)]
    pub cors: CorsConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Path the JSON relay endpoint is mounted on
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

/// Which mailer delivers messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MailBackend {
    #[default]
    Smtp,
    /// Keep messages in memory; nothing leaves the process
    Memory,
}

/// SMTP transport security
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TlsMode {
    #[default]
    Starttls,
    Tls,
    None,
}

impl std::str::FromStr for TlsMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "starttls" => Ok(TlsMode::Starttls),
            "tls" => Ok(TlsMode::Tls),
            "none" => Ok(TlsMode::None),
            other => bail!("Unknown SMTP TLS mode '{}' (expected starttls, tls or none)", other),
        }
    }
}

/// SMTP configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmtpConfig {
    #[serde(default)]
    pub backend: MailBackend,

    #[serde(default)]
    pub host: Option<String>,

    #[serde(default = "default_smtp_port")]
    pub port: u16,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub password: Option<String>,

    #[serde(default)]
    pub tls: TlsMode,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Envelope addresses for relayed messages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    /// Sender address of every relayed message
    #[serde(default)]
    pub from: String,

    /// Inbox that receives contact submissions
    #[serde(default)]
    pub to: String,

    #[serde(default = "default_subject_prefix")]
    pub subject_prefix: String,
}

/// Cross-origin configuration for the JSON endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CorsConfig {
    /// Empty means any origin
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

// Default values
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_endpoint() -> String {
    "/sendEmail".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_subject_prefix() -> String {
    "New contact form submission from".to_string()
}

// Default implementations
impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            endpoint: default_endpoint(),
        }
    }
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            backend: MailBackend::default(),
            host: None,
            port: default_smtp_port(),
            username: None,
            password: None,
            tls: TlsMode::default(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            from: String::new(),
            to: String::new(),
            subject_prefix: default_subject_prefix(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load `.env`, the file named by `RELAY_CONFIG` (default `./relay.toml`),
    /// apply environment overrides and validate
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| "relay.toml".to_string());
        let mut config = Self::load(&path)?;
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Override file values with whatever `lookup` returns
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(host) = lookup("RELAY_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("RELAY_PORT") {
            self.server.port = port
                .parse()
                .with_context(|| format!("RELAY_PORT is not a port number: {}", port))?;
        }
        if let Some(host) = lookup("SMTP_HOST") {
            self.smtp.host = Some(host);
        }
        if let Some(port) = lookup("SMTP_PORT") {
            self.smtp.port = port
                .parse()
                .with_context(|| format!("SMTP_PORT is not a port number: {}", port))?;
        }
        if let Some(username) = lookup("SMTP_USERNAME") {
            self.smtp.username = Some(username);
        }
        if let Some(password) = lookup("SMTP_PASSWORD") {
            self.smtp.password = Some(password);
        }
        if let Some(tls) = lookup("SMTP_TLS") {
            self.smtp.tls = tls.parse()?;
        }
        if let Some(from) = lookup("MAIL_FROM") {
            self.mail.from = from;
        }
        if let Some(to) = lookup("MAIL_TO") {
            self.mail.to = to;
        }
        if let Some(origins) = lookup("CORS_ALLOWED_ORIGINS") {
            self.cors.allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect();
        }
        Ok(())
    }

    /// Reject configurations the relay cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.smtp.backend == MailBackend::Smtp
            && self.smtp.host.as_deref().map_or(true, |h| h.trim().is_empty())
        {
            bail!("smtp.host (or SMTP_HOST) is required for the smtp backend");
        }
        if !is_valid_email(&self.mail.from) {
            bail!("mail.from (or MAIL_FROM) is not a valid address: '{}'", self.mail.from);
        }
        if !is_valid_email(&self.mail.to) {
            bail!("mail.to (or MAIL_TO) is not a valid address: '{}'", self.mail.to);
        }
        if !self.server.endpoint.starts_with('/') {
            bail!("server.endpoint must start with '/': '{}'", self.server.endpoint);
        }
        if RESERVED_PATHS.contains(&self.server.endpoint.as_str()) {
            bail!(
                "server.endpoint '{}' collides with a built-in route ({})",
                self.server.endpoint,
                RESERVED_PATHS.join(", ")
            );
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
