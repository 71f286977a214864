//! Logging configuration
//!
//! Read from the environment when the JVM loads the library:
//!
//! * `JNIBENCH_LOG_LEVEL`: `error`, `warn` (default), `info`, `debug`, `trace`
//! * `JNIBENCH_LOG_FORMAT`: `text` (default) or `json`
//! * `RUST_LOG`: full filter directive, overrides the level when set
//! * `NO_COLOR`: disable ANSI colours
//!
//! Unknown values fall back to the defaults. Output goes to stderr so the
//! benchmark harness's stdout stays clean.

use std::env;
use std::fmt;

pub const LEVEL_ENV: &str = "JNIBENCH_LOG_LEVEL";
pub const FORMAT_ENV: &str = "JNIBENCH_LOG_FORMAT";

/// Output format for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    pub fn parse(spec: &str) -> Option<Self> {
        match spec.to_ascii_lowercase().as_str() {
            "text" | "plain" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogFormat::Text => "text",
            LogFormat::Json => "json",
        })
    }
}

/// Logging verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn parse(spec: &str) -> Option<Self> {
        match spec.to_ascii_lowercase().as_str() {
            "error" | "err" => Some(Self::Error),
            "warn" | "warning" => Some(Self::Warn),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            "trace" => Some(Self::Trace),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        })
    }
}

/// Resolved log configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogOptions {
    pub format: LogFormat,
    pub level: LogLevel,
}

impl LogOptions {
    pub const DEFAULT: Self = Self {
        format: LogFormat::Text,
        level: LogLevel::Warn,
    };

    #[must_use]
    pub fn from_env() -> Self {
        let format = env::var_os(FORMAT_ENV).map(|v| v.to_string_lossy().into_owned());
        let level = env::var_os(LEVEL_ENV).map(|v| v.to_string_lossy().into_owned());
        apply_env_overrides(Self::DEFAULT, format.as_deref(), level.as_deref())
    }
}

impl Default for LogOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn apply_env_overrides(mut options: LogOptions, format: Option<&str>, level: Option<&str>) -> LogOptions {
    if let Some(spec) = format.and_then(LogFormat::parse) {
        options.format = spec;
    }
    if let Some(spec) = level.and_then(LogLevel::parse) {
        options.level = spec;
    }
    options
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logging(options: &LogOptions) {
    use std::io::IsTerminal;
    use std::sync::OnceLock;
    use tracing_subscriber::{fmt, EnvFilter};

    static INITIALISED: OnceLock<()> = OnceLock::new();

    let _ = INITIALISED.get_or_init(|| {
        let use_ansi = env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal();
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(options.level.to_string()));
        let builder = fmt::fmt()
            .with_env_filter(filter)
            .with_ansi(use_ansi)
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true);

        // A host process may already own the global subscriber.
        let _ = match options.format {
            LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish()),
            LogFormat::Text => tracing::subscriber::set_global_default(builder.compact().finish()),
        };
    });
}
