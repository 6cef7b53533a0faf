//! Logging Configuration and Initialization
//!
//! Centralized tracing setup for sitegraph components. The library itself
//! only emits `tracing` events; hosts that want console output can call
//! [`init_logging`] once at startup, or install their own subscriber.
//!
//! # Best Practices
//!
//! 1. **Never use `println!`, `eprintln!`, or `dbg!` macros**
//!    - Use structured logging macros instead: `trace!`, `debug!`, `info!`,
//!      `warn!`, `error!`
//!
//! 2. **Use structured logging with fields**:
//!    ```rust
//!    use tracing::info;
//!
//!    let model = "post";
//!    let count = 12;
//!    info!(model = %model, records = count, "Sourced records");
//!    ```
//!
//! # Example
//!
//! ```no_run
//! use sitegraph_common::logging::{init_logging, LogConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = LogConfig::from_env().unwrap_or_default();
//!     init_logging(&config)?;
//!     Ok(())
//! }
//! ```

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Log level for filtering messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Very detailed trace-level logging
    Trace,
    /// Debug-level logging for development
    Debug,
    /// Informational messages
    #[default]
    Info,
    /// Warning messages
    Warn,
    /// Error messages
    Error,
}

impl LogLevel {
    /// Convert to tracing Level
    pub fn to_tracing_level(self) -> Level {
        match self {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(anyhow::anyhow!("Invalid log level: {}", s)),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogConfig {
    /// Minimum level to emit
    pub level: LogLevel,

    /// Optional explicit filter directive (overrides `level` when set),
    /// e.g. "sitegraph_source=debug,reqwest=warn"
    pub filter: Option<String>,
}

impl LogConfig {
    /// Create a builder for LogConfig
    pub fn builder() -> LogConfigBuilder {
        LogConfigBuilder::default()
    }

    /// Load configuration from `SITEGRAPH_LOG_LEVEL` / `SITEGRAPH_LOG_FILTER`
    pub fn from_env() -> Result<Self> {
        let level = match std::env::var("SITEGRAPH_LOG_LEVEL") {
            Ok(value) => value.parse()?,
            Err(_) => LogLevel::default(),
        };
        let filter = std::env::var("SITEGRAPH_LOG_FILTER").ok();

        Ok(Self { level, filter })
    }
}

/// Builder for LogConfig
#[derive(Debug, Default)]
pub struct LogConfigBuilder {
    level: LogLevel,
    filter: Option<String>,
}

impl LogConfigBuilder {
    /// Set the minimum log level
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set an explicit filter directive
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Build the LogConfig
    pub fn build(self) -> LogConfig {
        LogConfig {
            level: self.level,
            filter: self.filter,
        }
    }
}

/// Initialize the global tracing subscriber with console output.
///
/// Returns an error if a subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let filter = match &config.filter {
        Some(directive) => EnvFilter::try_new(directive)?,
        None => EnvFilter::try_new(config.level.to_string())?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
