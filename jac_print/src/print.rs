//! Leveled print functions
//!
//! A print call goes through the log gate, renders its format string, then
//! writes one decorated line to the sink:
//!
//! `<heading><message>[<dim> @ <file>:<line><reset>]\n`
//!
//! Headings are colored with fixed ANSI codes (taken from `colored`), written
//! whether or not the sink is a terminal. A failed render writes nothing.

use std::io::Write;

use colored::Color;

use crate::error::Result;
use crate::log::{self, LogLevel};
use crate::print_arg::PrintArgs;

const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[2m";

/// Call site of a print statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: &'static str,
    pub line: u32,
}

impl SourceLocation {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Location of the caller (follows `#[track_caller]` chains)
    #[track_caller]
    pub fn caller() -> Self {
        let location = std::panic::Location::caller();
        Self::new(location.file(), location.line())
    }
}

/// Colored heading of a level, including the trailing space
///
/// `Empty` has no label: its heading is a bare color reset.
pub fn heading(level: LogLevel) -> String {
    let (label, color) = match level {
        LogLevel::Debug => ("[DEBUG]", Color::Green),
        LogLevel::Info => ("[INFO] ", Color::Blue),
        LogLevel::Warn => ("[WARN] ", Color::Yellow),
        LogLevel::Error => ("[ERROR]", Color::Red),
        LogLevel::Empty => return RESET.to_string(),
    };

    format!("\x1b[{}m{}{} ", color.to_fg_str(), label, RESET)
}

/// Assemble the full output line for an already rendered message
pub fn decorate(
    level: LogLevel,
    print_location: bool,
    message: &str,
    location: SourceLocation,
) -> String {
    let mut line = heading(level);
    line.push_str(message);

    if print_location {
        line.push_str(&format!(
            "{} @ {}:{}{}",
            DIM, location.file, location.line, RESET
        ));
    }

    line.push('\n');
    line
}

/// Write an already rendered message through the gate
///
/// Used by callers whose message is formatted elsewhere (e.g. `log` records).
pub fn emit(
    level: LogLevel,
    print_location: bool,
    message: &str,
    sink: &mut dyn Write,
    location: SourceLocation,
) -> Result<()> {
    if !log::is_enabled(level) {
        return Ok(());
    }

    write_line(sink, &decorate(level, print_location, message, location))
}

/// Print a formatted message at `level`
///
/// Does nothing if the log gate drops `level`. Otherwise `format_string` is
/// rendered against `args` and the decorated line is written to `sink` in a
/// single write. Format errors are returned before anything is written.
///
/// # Example
///
/// ```
/// use jac_print::jac::{print, LogLevel, SourceLocation};
/// use jac_print::print_args;
///
/// let mut out: Vec<u8> = Vec::new();
/// print(
///     LogLevel::Empty,
///     false,
///     "Hello, {}!",
///     &print_args!["World"],
///     &mut out,
///     SourceLocation::caller(),
/// )?;
/// assert_eq!(out, b"\x1b[0mHello, World!\n");
/// # Ok::<(), jac_print::jac::Error>(())
/// ```
pub fn print(
    level: LogLevel,
    print_location: bool,
    format_string: &str,
    args: &PrintArgs,
    sink: &mut dyn Write,
    location: SourceLocation,
) -> Result<()> {
    if !log::is_enabled(level) {
        return Ok(());
    }

    let message = args.render(format_string)?;

    write_line(sink, &decorate(level, print_location, &message, location))
}

fn write_line(sink: &mut dyn Write, line: &str) -> Result<()> {
    sink.write_all(line.as_bytes())?;
    sink.flush()?;
    Ok(())
}

// Fixed-level wrappers. The location is the wrapper's caller.

/// Print without heading or location, ignoring the log level
#[track_caller]
pub fn print_simple(format_string: &str, args: &PrintArgs, sink: &mut dyn Write) -> Result<()> {
    print(LogLevel::Empty, false, format_string, args, sink, SourceLocation::caller())
}

/// Print with [DEBUG] heading; dropped in release builds
#[track_caller]
pub fn print_debug(format_string: &str, args: &PrintArgs, sink: &mut dyn Write) -> Result<()> {
    print(LogLevel::Debug, true, format_string, args, sink, SourceLocation::caller())
}

#[track_caller]
pub fn print_info(format_string: &str, args: &PrintArgs, sink: &mut dyn Write) -> Result<()> {
    print(LogLevel::Info, true, format_string, args, sink, SourceLocation::caller())
}

#[track_caller]
pub fn print_warn(format_string: &str, args: &PrintArgs, sink: &mut dyn Write) -> Result<()> {
    print(LogLevel::Warn, true, format_string, args, sink, SourceLocation::caller())
}

/// Print with [ERROR] heading (the macro form defaults to stderr)
#[track_caller]
pub fn print_error(format_string: &str, args: &PrintArgs, sink: &mut dyn Write) -> Result<()> {
    print(LogLevel::Error, true, format_string, args, sink, SourceLocation::caller())
}

#[cfg(test)]
#[path = "print_tests.rs"]
mod tests;
