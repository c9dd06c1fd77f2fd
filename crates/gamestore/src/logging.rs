//! Logging configuration and subscriber construction.
//!
//! Repositories take a [`Dispatch`] at construction instead of reaching for the
//! global subscriber, so hosts can route adapter logs wherever they like. The
//! same dispatch can also be installed globally with [`LoggingConfig::init`].

use serde::Deserialize;
use thiserror::Error;
use tracing::Dispatch;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Errors that can occur while installing the global subscriber.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoggingError {
    #[error("A global subscriber is already installed: {0}")]
    AlreadyInitialized(String),
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Filter directives used when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "gamestore=debug".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    /// Builds a dispatch writing to stdout. `RUST_LOG` overrides `level`.
    pub fn dispatch(&self) -> Dispatch {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));
        self.build(filter, std::io::stdout, true)
    }

    /// Builds a dispatch writing to `writer`, filtered by `level` only.
    pub fn dispatch_with_writer<W>(&self, writer: W) -> Dispatch
    where
        W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        self.build(EnvFilter::new(&self.level), writer, false)
    }

    /// Installs [`LoggingConfig::dispatch`] as the global default subscriber.
    pub fn init(&self) -> Result<(), LoggingError> {
        tracing::dispatcher::set_global_default(self.dispatch())
            .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))
    }

    fn build<W>(&self, filter: EnvFilter, writer: W, ansi: bool) -> Dispatch
    where
        W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        let registry = tracing_subscriber::registry().with(filter);

        match self.format {
            LogFormat::Json => Dispatch::new(
                registry.with(fmt::layer().json().with_writer(writer).with_ansi(false)),
            ),
            LogFormat::Pretty => {
                Dispatch::new(registry.with(fmt::layer().with_writer(writer).with_ansi(ansi)))
            }
        }
    }
}
