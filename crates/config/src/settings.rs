//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Runtime environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    /// Development mode - relaxed validation, warnings only
    #[default]
    Development,
    /// Staging mode - stricter validation
    Staging,
    /// Production mode - all validations enforced
    Production,
}

impl RuntimeEnvironment {
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Production | Self::Staging)
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Chat delegate configuration
    #[serde(default)]
    pub delegate: DelegateConfig,

    /// Lead sink configuration
    #[serde(default)]
    pub sink: SinkConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_delegate()?;
        self.validate_sink()?;
        Ok(())
    }

    fn validate_server(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                message: "Port cannot be 0".to_string(),
            });
        }

        if self.environment.is_production()
            && self.server.cors_enabled
            && self.server.cors_origins.is_empty()
        {
            tracing::warn!(
                "CORS is enabled in production but no origins are configured. \
                 This may block legitimate requests."
            );
        }

        Ok(())
    }

    fn validate_delegate(&self) -> Result<(), ConfigError> {
        if self.delegate.endpoint.is_empty() {
            if self.environment.is_strict() {
                return Err(ConfigError::MissingField("delegate.endpoint".to_string()));
            }
            tracing::warn!("delegate.endpoint not configured; every chat will use the fallback script");
        }

        if self.delegate.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "delegate.timeout_secs".to_string(),
                message: "Timeout must be at least 1 second".to_string(),
            });
        }

        Ok(())
    }

    fn validate_sink(&self) -> Result<(), ConfigError> {
        if self.sink.webhook_url.is_empty() {
            if self.environment.is_strict() {
                return Err(ConfigError::MissingField("sink.webhook_url".to_string()));
            }
            tracing::warn!("sink.webhook_url not configured; lead dispatch will always fail");
        } else if !self.sink.webhook_url.starts_with("http") {
            return Err(ConfigError::InvalidValue {
                field: "sink.webhook_url".to_string(),
                message: format!("Expected an http(s) URL, got '{}'", self.sink.webhook_url),
            });
        }

        if self.sink.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "sink.timeout_secs".to_string(),
                message: "Timeout must be at least 1 second".to_string(),
            });
        }

        Ok(())
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server host
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// CORS allowed origins
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8000
}
fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_enabled: default_true(),
            // Empty by default - must be explicitly configured for production
            cors_origins: Vec::new(),
        }
    }
}

/// Chat delegate configuration
///
/// The delegate is the opaque AI chat service that produces free-form
/// replies. Any transport error or non-2xx status is treated as a uniform
/// failure and the engine falls back to the scripted responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DelegateConfig {
    /// Chat endpoint URL
    #[serde(default)]
    pub endpoint: String,

    /// Request timeout in seconds (no retries; a single failed attempt
    /// immediately falls back)
    #[serde(default = "default_delegate_timeout")]
    pub timeout_secs: u64,

    /// How many trailing turns of history to send with each request
    #[serde(default = "default_history_window")]
    pub history_window: usize,
}

fn default_delegate_timeout() -> u64 {
    15
}
fn default_history_window() -> usize {
    10
}

impl Default for DelegateConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            timeout_secs: default_delegate_timeout(),
            history_window: default_history_window(),
        }
    }
}

/// Lead sink configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SinkConfig {
    /// Webhook URL for lead notifications
    #[serde(default)]
    pub webhook_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_sink_timeout")]
    pub timeout_secs: u64,
}

fn default_sink_timeout() -> u64 {
    10
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            webhook_url: String::new(),
            timeout_secs: default_sink_timeout(),
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

/// Load settings from files and environment
///
/// Priority (highest to lowest):
/// 1. Environment variables (LEAD_AGENT_ prefix)
/// 2. config/{env}.yaml (if env specified)
/// 3. config/default.yaml
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    builder = builder.add_source(File::with_name("config/default").required(false));

    if let Some(env_name) = env {
        builder =
            builder.add_source(File::with_name(&format!("config/{}", env_name)).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix("LEAD_AGENT")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    Ok(settings)
}
