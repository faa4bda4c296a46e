// ABOUTME: Logging configuration and tracing-subscriber setup for the nutrilabel binary
// ABOUTME: Level from RUST_LOG, output format from LOG_FORMAT, structured fields on stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Structured logging setup
//!
//! The library only emits `tracing` events. Installing a subscriber is the
//! binary's job; tests use their own quiet subscriber.

use anyhow::Result;
use nutrilabel_core::constants::service_names;
use std::env;
use std::io;
use tracing::{debug, Level};
use tracing_subscriber::{
    filter::Directive,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread ids and names
    pub include_thread: bool,
    /// Service name attached to the startup event
    pub service_name: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Multi-line human readable output
    Pretty,
    /// Single-line output
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Compact,
            include_location: false,
            include_thread: false,
            service_name: service_names::NUTRILABEL.into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("pretty") => LogFormat::Pretty,
            _ => LogFormat::Compact,
        };

        Self {
            level: env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
            format,
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: env::var("LOG_INCLUDE_THREAD").is_ok(),
            ..Self::default()
        }
    }

    /// Override the level, e.g. from a `--verbose` flag
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Build the event filter
    ///
    /// A plain level also pins the crate's own targets; a full directive
    /// string is used as is.
    fn filter(&self) -> EnvFilter {
        let filter = EnvFilter::new(&self.level);
        let Ok(level) = self.level.parse::<Level>() else {
            return filter;
        };
        ["nutrilabel", "nutrilabel_core"]
            .into_iter()
            .fold(filter, |filter, target| {
                match format!("{target}={level}").parse::<Directive>() {
                    Ok(directive) => filter.add_directive(directive),
                    Err(_) => filter,
                }
            })
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.filter());
        let layer = fmt::layer()
            .with_file(self.include_location)
            .with_line_number(self.include_location)
            .with_thread_ids(self.include_thread)
            .with_thread_names(self.include_thread)
            .with_writer(io::stderr)
            .with_span_events(FmtSpan::NONE);

        match self.format {
            LogFormat::Json => registry.with(layer.json()).try_init()?,
            LogFormat::Pretty => registry.with(layer.with_target(true)).try_init()?,
            LogFormat::Compact => registry.with(layer.compact().with_target(false)).try_init()?,
        }

        debug!(
            service.name = %self.service_name,
            service.version = env!("CARGO_PKG_VERSION"),
            log.level = %self.level,
            log.format = ?self.format,
            "Logging initialized"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_compact_info() {
        let config = LoggingConfig::default();
        assert_eq!(config.format, LogFormat::Compact);
        assert_eq!(config.level, "info");
        assert_eq!(config.service_name, "nutrilabel");
    }

    #[test]
    fn test_pretty_format_installs_subscriber() {
        // Only test in this crate that installs the global subscriber
        let config = LoggingConfig {
            format: LogFormat::Pretty,
            include_location: true,
            ..LoggingConfig::default()
        }
        .with_level("warn");
        assert!(config.init().is_ok());
        assert!(config.init().is_err());
    }

    #[test]
    fn test_plain_level_pins_crate_targets() {
        let filter = LoggingConfig::default().with_level("debug").filter().to_string();
        assert!(filter.contains("nutrilabel=debug"));
        assert!(filter.contains("nutrilabel_core=debug"));
    }
}
