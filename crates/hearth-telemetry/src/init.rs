//! Subscriber installation for Hearth binaries.
//!
//! # Design
//! - One entry point installs a filter plus a single formatting layer.
//! - `RUST_LOG` wins over the configured level so ad-hoc debugging needs no
//!   settings change.
//! - Log lines go to stderr; stdout belongs to command output.
//! - The build identifier is fixed on first install and reused by every span.

use std::fmt::{self, Display, Formatter};
use std::io;
use std::str::FromStr;

use once_cell::sync::OnceCell;
use tracing_subscriber::fmt as fmt_layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::error::{Result, TelemetryError};

/// Level applied when neither `RUST_LOG` nor settings provide one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Fallback build identifier for local builds.
const DEV_BUILD: &str = "dev";

static BUILD_SHA: OnceCell<String> = OnceCell::new();

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Install the global subscriber described by `config`.
///
/// # Errors
///
/// Returns [`TelemetryError::SubscriberInstall`] when a global subscriber is
/// already set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let _ = BUILD_SHA.set(config.build_sha.to_string());
    let level = config.level.trim().to_ascii_lowercase();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));

    tracing_subscriber::registry()
        .with(output_layer(config.format).with_filter(filter))
        .try_init()
        .map_err(|source| TelemetryError::SubscriberInstall { source })
}

fn output_layer(format: LogFormat) -> BoxedLayer {
    match format {
        LogFormat::Json => fmt_layer::layer()
            .json()
            .with_writer(io::stderr)
            .flatten_event(true)
            .with_current_span(true)
            .with_target(false)
            .boxed(),
        LogFormat::Pretty => fmt_layer::layer()
            .compact()
            .with_writer(io::stderr)
            .with_target(false)
            .boxed(),
    }
}

/// Build identifier: the installed value, then `HEARTH_BUILD_SHA` at compile
/// time, then `dev`.
#[must_use]
pub fn build_sha() -> &'static str {
    BUILD_SHA
        .get()
        .map(String::as_str)
        .or(option_env!("HEARTH_BUILD_SHA"))
        .unwrap_or(DEV_BUILD)
}

/// Subscriber settings.
#[derive(Debug, Clone)]
pub struct LoggingConfig<'a> {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: &'a str,
    /// Output encoding.
    pub format: LogFormat,
    /// Build identifier recorded on the process span.
    pub build_sha: &'a str,
}

impl Default for LoggingConfig<'_> {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL,
            format: LogFormat::infer(),
            build_sha: build_sha(),
        }
    }
}

/// Log line encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event.
    Json,
    /// Compact human-readable lines.
    Pretty,
}

impl LogFormat {
    /// Pretty for debug builds, JSON otherwise.
    #[must_use]
    pub const fn infer() -> Self {
        if cfg!(debug_assertions) {
            Self::Pretty
        } else {
            Self::Json
        }
    }

    /// Settings identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Pretty => "pretty",
        }
    }
}

impl Display for LogFormat {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for LogFormat {
    type Err = TelemetryError;

    fn from_str(value: &str) -> Result<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        [Self::Json, Self::Pretty]
            .into_iter()
            .find(|format| format.as_str() == normalized)
            .ok_or_else(|| TelemetryError::UnknownFormat {
                value: value.to_string(),
            })
    }
}
