//! # Application State
//!
//! Runtime configuration and the shared services handed to every route
//! handler. State is immutable after startup and cheap to clone.

use crate::services::logs::LogsService;

/// Output format for the service's own tracing output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable single-line output.
    #[default]
    Text,
    /// One JSON object per line, for log shippers.
    Json,
}

/// Service configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// TCP port to bind on all interfaces.
    pub port: u16,
    /// Whether HTTP metrics are recorded and `/metrics` is mounted.
    pub metrics_enabled: bool,
    pub log_format: LogFormat,
}

impl AppConfig {
    const DEFAULT_PORT: u16 = 8080;

    /// Read configuration from the environment.
    ///
    /// - `UIGW_PORT`: listen port (default 8080). Unparseable values fall back
    ///   to the default with a warning.
    /// - `UIGW_METRICS_ENABLED`: anything other than `"false"` enables metrics.
    /// - `UIGW_LOG_FORMAT`: `"json"` selects JSON output, anything else text.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("UIGW_PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "invalid UIGW_PORT, using default");
                Self::DEFAULT_PORT
            }),
            None => Self::DEFAULT_PORT,
        };
        let metrics_enabled = lookup("UIGW_METRICS_ENABLED")
            .map(|v| v.to_lowercase() != "false")
            .unwrap_or(true);
        let log_format = match lookup("UIGW_LOG_FORMAT") {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };
        Self {
            port,
            metrics_enabled,
            log_format,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: Self::DEFAULT_PORT,
            metrics_enabled: true,
            log_format: LogFormat::Text,
        }
    }
}

/// Shared application state passed to all route handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub logs: LogsService,
}

impl AppState {
    /// Default configuration with the stub log source.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default(), LogsService::stub())
    }

    pub fn with_config(config: AppConfig, logs: LogsService) -> Self {
        Self { config, logs }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
