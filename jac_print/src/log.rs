//! Log levels and the global log gate
//!
//! This module provides:
//! - Ordered log levels (Debug < Info < Warn < Error < Empty)
//! - A process-wide threshold, read before every leveled print
//! - The `print_*!` macros
//!
//! The threshold is an atomic: concurrent readers and writers never race, and
//! the last write wins. Debug prints are compiled out of the gate entirely in
//! builds without `debug_assertions`, whatever the threshold says.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

use crate::error::Error;

/// Whether debug-level prints can be emitted at all
pub const DEBUG: bool = cfg!(debug_assertions);

/// Log levels, ordered by rank
///
/// `Empty` is the level of unleveled ("simple") prints. It ranks above every
/// real level, so it is never gated out; setting it as the threshold silences
/// every leveled print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum LogLevel {
    /// Development information, only emitted by debug builds
    Debug = 1 << 0,

    /// Important informational messages
    Info = 1 << 1,

    /// Potential issues
    Warn = 1 << 2,

    /// Errors (printed to stderr by default)
    Error = 1 << 3,

    /// No heading, never gated
    Empty = 1 << 4,
}

impl LogLevel {
    /// All levels, lowest rank first
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Empty,
    ];

    /// Lower-case level name
    pub fn name(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Empty => "empty",
        }
    }

    fn rank(self) -> u8 {
        self as u8
    }

    fn from_rank(rank: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.rank() == rank)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LogLevel {
    type Err = Error;

    /// Case-insensitive level name; `off` and `none` are aliases of `empty`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" | "trace" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "empty" | "off" | "none" => Ok(LogLevel::Empty),
            _ => Err(Error::InvalidLogLevel(s.to_string())),
        }
    }
}

// ===== GLOBAL THRESHOLD =====

/// Current threshold, stored as a level rank
static CURRENT_LEVEL: AtomicU8 = AtomicU8::new(default_log_level() as u8);

/// Threshold a process starts with: Debug in debug builds, Info otherwise
pub const fn default_log_level() -> LogLevel {
    if DEBUG { LogLevel::Debug } else { LogLevel::Info }
}

/// Current global threshold
pub fn current_log_level() -> LogLevel {
    // Only valid ranks are ever stored
    LogLevel::from_rank(CURRENT_LEVEL.load(Ordering::Relaxed)).unwrap_or(LogLevel::Empty)
}

/// Set the global threshold
///
/// Messages below `level` are dropped. Concurrent setters: last write wins.
pub fn set_current_log_level(level: LogLevel) {
    CURRENT_LEVEL.store(level.rank(), Ordering::Relaxed);
}

/// Restore the build-mode default threshold
pub fn reset_log_level() {
    set_current_log_level(default_log_level());
}

/// Log gate: whether a message at `level` should be rendered and emitted
pub fn is_enabled(level: LogLevel) -> bool {
    if level == LogLevel::Debug && !DEBUG {
        return false;
    }

    current_log_level() <= level
}

// ===== PRINT MACROS =====

#[doc(hidden)]
#[macro_export]
macro_rules! __print_leveled {
    ($level:expr, $location:expr, $sink:expr, $fmt:expr $(, $arg:expr)*) => {
        $crate::jac::print(
            $level,
            $location,
            $fmt,
            &$crate::print_args![$($arg),*],
            $sink,
            $crate::jac::SourceLocation::new(file!(), line!()),
        )
    };
}

/// Print without heading or location, ignoring the log level
///
/// # Example
///
/// ```no_run
/// jac_print::print_simple!("This will print only this message.")?;
/// # Ok::<(), jac_print::jac::Error>(())
/// ```
#[macro_export]
macro_rules! print_simple {
    (sink: $sink:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::__print_leveled!($crate::jac::LogLevel::Empty, false, $sink, $fmt $(, $arg)*)
    };
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::print_simple!(sink: &mut ::std::io::stdout(), $fmt $(, $arg)*)
    };
}

/// Print with [DEBUG] heading (debug builds only)
///
/// # Example
///
/// ```no_run
/// jac_print::print_debug!("Initialized with {} subsystems", 3)?;
/// # Ok::<(), jac_print::jac::Error>(())
/// ```
#[macro_export]
macro_rules! print_debug {
    (sink: $sink:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::__print_leveled!($crate::jac::LogLevel::Debug, true, $sink, $fmt $(, $arg)*)
    };
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::print_debug!(sink: &mut ::std::io::stdout(), $fmt $(, $arg)*)
    };
}

/// Print with [INFO] heading
///
/// # Example
///
/// ```no_run
/// jac_print::print_info!("{0} + {1} = {2}", 1, 2, 3)?;
/// # Ok::<(), jac_print::jac::Error>(())
/// ```
#[macro_export]
macro_rules! print_info {
    (sink: $sink:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::__print_leveled!($crate::jac::LogLevel::Info, true, $sink, $fmt $(, $arg)*)
    };
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::print_info!(sink: &mut ::std::io::stdout(), $fmt $(, $arg)*)
    };
}

/// Print with [WARN] heading
///
/// # Example
///
/// ```no_run
/// jac_print::print_warn!("Frame took {} ms", 40)?;
/// # Ok::<(), jac_print::jac::Error>(())
/// ```
#[macro_export]
macro_rules! print_warn {
    (sink: $sink:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::__print_leveled!($crate::jac::LogLevel::Warn, true, $sink, $fmt $(, $arg)*)
    };
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::print_warn!(sink: &mut ::std::io::stdout(), $fmt $(, $arg)*)
    };
}

/// Print with [ERROR] heading, to stderr unless a sink is given
///
/// # Example
///
/// ```no_run
/// jac_print::print_error!("Unavailable graphics API selected")?;
/// # Ok::<(), jac_print::jac::Error>(())
/// ```
#[macro_export]
macro_rules! print_error {
    (sink: $sink:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::__print_leveled!($crate::jac::LogLevel::Error, true, $sink, $fmt $(, $arg)*)
    };
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::print_error!(sink: &mut ::std::io::stderr(), $fmt $(, $arg)*)
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
