use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub otp: OtpSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 3000 }

/// Settings for the simulated one-time-code flow
#[derive(Debug, Clone, Deserialize)]
pub struct OtpSettings {
    #[serde(default = "default_otp_expiry")]
    pub expires_in_secs: u64,
    #[serde(default = "default_true")]
    pub log_codes: bool,
}

impl Default for OtpSettings {
    fn default() -> Self {
        Self {
            expires_in_secs: default_otp_expiry(),
            log_codes: default_true(),
        }
    }
}

fn default_otp_expiry() -> u64 { 600 }
fn default_true() -> bool { true }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Output formats the subscriber supports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LoggingSettings {
    /// `None` when `format` names no known output
    pub fn log_format(&self) -> Option<LogFormat> {
        match self.format.as_str() {
            "json" => Some(LogFormat::Json),
            "pretty" => Some(LogFormat::Pretty),
            _ => None,
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Built-in defaults
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with LUME__)
    /// 5. `PORT`, `LOG_LEVEL` and `LOG_FORMAT`
    pub fn load() -> Result<Self, ConfigError> {
        let settings = with_defaults(Config::builder())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., LUME__SERVER__WORKERS -> server.workers
            .add_source(lume_environment())
            .build()?;

        apply_platform_overrides(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = with_defaults(Config::builder())?
            .add_source(File::from(path.as_ref()))
            .add_source(lume_environment())
            .build()?;

        apply_platform_overrides(settings)?.try_deserialize()
    }
}

fn with_defaults(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
    builder
        .set_default("server.host", default_host())?
        .set_default("server.port", i64::from(default_port()))?
        .set_default("otp.expires_in_secs", default_otp_expiry() as i64)?
        .set_default("otp.log_codes", default_true())?
        .set_default("logging.level", default_log_level())?
        .set_default("logging.format", default_log_format())
}

fn lume_environment() -> Environment {
    Environment::with_prefix("LUME")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Unprefixed variables hosting platforms set (`PORT`) and the logging
/// shortcuts, applied on top of every other source
#[derive(Debug, Clone, Default)]
pub struct PlatformOverrides {
    pub port: Option<String>,
    pub log_level: Option<String>,
    pub log_format: Option<String>,
}

impl PlatformOverrides {
    pub fn from_env() -> Self {
        use std::env;

        Self {
            port: env::var("PORT").ok(),
            log_level: env::var("LOG_LEVEL").ok(),
            log_format: env::var("LOG_FORMAT").ok(),
        }
    }

    /// Layer the overrides over `settings`; an unparsable `PORT` is an error
    pub fn apply(&self, settings: Config) -> Result<Config, ConfigError> {
        let mut builder = Config::builder().add_source(settings);

        if let Some(port) = &self.port {
            let port: u16 = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::Message(format!("PORT is not a valid port: {}", port)))?;
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(level) = &self.log_level {
            builder = builder.set_override("logging.level", level.as_str())?;
        }
        if let Some(format) = &self.log_format {
            builder = builder.set_override("logging.format", format.as_str())?;
        }

        builder.build()
    }
}

fn apply_platform_overrides(settings: Config) -> Result<Config, ConfigError> {
    PlatformOverrides::from_env().apply(settings)
}
