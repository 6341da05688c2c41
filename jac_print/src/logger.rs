//! Bridge from the `log` facade to the jac printer
//!
//! Installing [`PrintLogger`] makes `log::info!` and friends go through the
//! same log gate and line format as the `print_*` functions. Records arrive
//! already formatted by `log`, so they skip placeholder rendering.
//!
//! Level mapping: `Trace` and `Debug` print as [DEBUG]; the others map 1:1.

use std::io::{self, Write};

use ::log::{Level, LevelFilter, Log, Metadata, Record};

use crate::error::{Error, Result};
use crate::log::{is_enabled, set_current_log_level, LogLevel};
use crate::print::{emit, SourceLocation};

static LOGGER: PrintLogger = PrintLogger;

/// `log::Log` implementation printing through the log gate
///
/// Errors go to stderr, everything else to stdout.
///
/// # Example
///
/// ```no_run
/// use jac_print::jac::PrintLogger;
///
/// PrintLogger::init_from_env("JAC_LOG")?;
/// log::info!("Renderer initialized with {} passes", 3);
/// # Ok::<(), jac_print::jac::Error>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct PrintLogger;

impl PrintLogger {
    /// Install the logger for the `log` facade
    ///
    /// # Errors
    ///
    /// Returns `Error::LoggerInstall` if a logger is already installed.
    pub fn init() -> Result<()> {
        ::log::set_logger(&LOGGER).map_err(|e| Error::LoggerInstall(e.to_string()))?;

        // Filtering happens in `enabled`, so the threshold can change later
        ::log::set_max_level(LevelFilter::Trace);

        Ok(())
    }

    /// Set the threshold from environment variable `var`, then install
    ///
    /// An unset variable keeps the current threshold.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidLogLevel` if the variable holds an unknown level
    /// name (nothing is installed), or `Error::LoggerInstall`.
    pub fn init_from_env(var: &str) -> Result<()> {
        if let Ok(value) = std::env::var(var) {
            set_current_log_level(value.parse()?);
        }

        Self::init()
    }

    /// Write one record to `sink`, through the log gate
    pub fn log_to(&self, record: &Record, sink: &mut dyn Write) -> Result<()> {
        let location = SourceLocation::new(
            record.file_static().unwrap_or("<unknown>"),
            record.line().unwrap_or(0),
        );

        emit(
            to_log_level(record.level()),
            true,
            &record.args().to_string(),
            sink,
            location,
        )
    }
}

impl Log for PrintLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        is_enabled(to_log_level(metadata.level()))
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        // Log::log has no error channel; a broken stdout/stderr is ignored
        let _ = match record.level() {
            Level::Error => self.log_to(record, &mut io::stderr()),
            _ => self.log_to(record, &mut io::stdout()),
        };
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();
    }
}

/// Map a `log` level to a jac level
pub fn to_log_level(level: Level) -> LogLevel {
    match level {
        Level::Trace | Level::Debug => LogLevel::Debug,
        Level::Info => LogLevel::Info,
        Level::Warn => LogLevel::Warn,
        Level::Error => LogLevel::Error,
    }
}

#[cfg(test)]
#[path = "logger_tests.rs"]
mod tests;
