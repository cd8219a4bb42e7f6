//! # Logger
//!
//! A centralized logging utility for the publisher.
//! Diagnostics go to **stderr** so that standard output stays reserved for the
//! single result line a CI job greps for.
//!
//! * Use [`LoggerBuilder::level`] for the default verbosity; `RUST_LOG` still wins.
//! * Use [`LoggerBuilder::env_filter`] to set module-directed filters
//!   (e.g., `"oaspub_catalog=debug,reqwest=info"`).
//! * Use [`LoggerBuilder::json`] for machine-readable CI logs.
//!
//! ## Example
//!
//! ```rust
//! # use oaspub_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("oaspub")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::LoggerError;
pub use tracing::level_filters::LevelFilter;

use private::Sealed;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

#[derive(Debug)]
struct LoggerConfig {
    level: LevelFilter,
    env_filter: Option<String>,
    json: bool,
    ansi: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self { level: LevelFilter::WARN, env_filter: None, json: false, ansi: true }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}

/// A builder for configuring and initializing the global tracing subscriber.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName> {
    config: LoggerConfig,
    name: N,
}

impl LoggerBuilder<NoName> {
    /// Sets the name of the logger.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName> {
        LoggerBuilder { name: WithName(name.into()), config: self.config }
    }
}

impl LoggerBuilder<WithName> {
    /// Configures the minimum log level to be emitted.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Adds an explicit env filter (e.g., `oaspub_kernel=debug`).
    ///
    /// Invalid filters will cause [`LoggerBuilder::init`] to return an error.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    /// Switches the output to one JSON object per event.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json(mut self, enabled: bool) -> Self {
        self.config.json = enabled;
        self
    }

    /// Enables ANSI colors for the text format.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn ansi(mut self, enabled: bool) -> Self {
        self.config.ansi = enabled;
        self
    }

    /// Consumes the builder and initializes the global tracing subscriber.
    ///
    /// # Errors
    /// Returns [`LoggerError::Subscriber`] if a global subscriber has already been set.
    /// Returns [`LoggerError::InvalidConfiguration`] for invalid builder settings.
    pub fn init(self) -> Result<Logger, LoggerError> {
        if self.name.0.trim().is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "Logger name cannot be empty".into(),
                context: None,
            });
        }

        let env_filter = build_env_filter(&self.config)?;

        let output = if self.config.json {
            layer().json().with_writer(std::io::stderr).boxed()
        } else {
            layer().compact().with_ansi(self.config.ansi).with_writer(std::io::stderr).boxed()
        };

        tracing_subscriber::registry().with(env_filter).with(output).try_init()?;

        Ok(Logger { name: self.name.0 })
    }
}

/// A handle to the initialized logging system.
#[must_use = "Keep the logger handle alive for the lifetime of the program."]
#[derive(Debug)]
pub struct Logger {
    name: String,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`] to configure the global tracing subscriber.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), name: NoName }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

fn build_env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    config.env_filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            })
        },
    )
}
