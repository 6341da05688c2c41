//! Unit tests for print.rs
//!
//! Tests headings, decoration, the fixed-level wrappers and gating.
//!
//! IMPORTANT: printing reads the global threshold. Tests that print are marked
//! #[serial] and restore the default threshold before returning.

use crate::error::{Error, FormatError};
use crate::log::{reset_log_level, set_current_log_level, LogLevel, DEBUG};
use crate::print::{
    decorate, emit, heading, print, print_debug, print_error, print_info, print_simple,
    print_warn, SourceLocation,
};
use crate::print_arg::{PrintArg, PrintArgs};
use serial_test::serial;

const RESET: &str = "\x1b[0m";

fn output(sink: &[u8]) -> String {
    String::from_utf8(sink.to_vec()).unwrap()
}

// ============================================================================
// HEADING / DECORATION TESTS
// ============================================================================

#[test]
fn test_headings() {
    assert_eq!(heading(LogLevel::Debug), "\x1b[32m[DEBUG]\x1b[0m ");
    assert_eq!(heading(LogLevel::Info), "\x1b[34m[INFO] \x1b[0m ");
    assert_eq!(heading(LogLevel::Warn), "\x1b[33m[WARN] \x1b[0m ");
    assert_eq!(heading(LogLevel::Error), "\x1b[31m[ERROR]\x1b[0m ");
    assert_eq!(heading(LogLevel::Empty), RESET);
}

#[test]
fn test_decorate_with_location() {
    let line = decorate(
        LogLevel::Warn,
        true,
        "low memory",
        SourceLocation::new("src/main.rs", 12),
    );
    assert_eq!(
        line,
        "\x1b[33m[WARN] \x1b[0m low memory\x1b[2m @ src/main.rs:12\x1b[0m\n"
    );
}

#[test]
fn test_decorate_without_location() {
    let line = decorate(
        LogLevel::Info,
        false,
        "ready",
        SourceLocation::new("src/main.rs", 12),
    );
    assert_eq!(line, "\x1b[34m[INFO] \x1b[0m ready\n");
}

#[test]
fn test_source_location_caller() {
    let location = SourceLocation::caller();
    assert_eq!(location.line, line!() - 1);
    assert_eq!(location.file, file!());
}

// ============================================================================
// ARGUMENT TYPE TESTS
// ============================================================================

struct StringConvertible;

impl PrintArg for StringConvertible {
    fn to_print_arg(&self) -> String {
        "string_convertible".to_string()
    }
}

fn simple(value: &dyn PrintArg) -> String {
    let mut sink: Vec<u8> = Vec::new();
    print_simple("{}", &PrintArgs::new().with(value), &mut sink).unwrap();
    output(&sink)
}

#[test]
#[serial]
fn test_print_different_types() {
    let text = String::from("string");
    let values: [(&dyn PrintArg, &str); 12] = [
        (&true, "true"),
        (&'a', "a"),
        (&1i16, "1"),
        (&-2i32, "-2"),
        (&3i64, "3"),
        (&4.0f32, "4.000000"),
        (&5.0f64, "5.000000"),
        (&6u32, "6"),
        (&text, "string"),
        (&"string_view", "string_view"),
        (&"czstring", "czstring"),
        (&StringConvertible, "string_convertible"),
    ];

    for (value, expected) in values {
        assert_eq!(simple(value), format!("{}{}\n", RESET, expected));
    }
}

// ============================================================================
// LOCATION TESTS
// ============================================================================

#[test]
#[serial]
fn test_print_source_location() {
    let mut sink: Vec<u8> = Vec::new();

    print_info("", &PrintArgs::new(), &mut sink).unwrap();
    let line = line!() - 1;

    let text = output(&sink);
    assert!(text.contains(&line.to_string()));
    assert!(text.contains(file!()));
}

#[test]
#[serial]
fn test_print_simple_has_no_location() {
    let mut sink: Vec<u8> = Vec::new();
    print_simple("plain", &PrintArgs::new(), &mut sink).unwrap();
    assert_eq!(output(&sink), format!("{}plain\n", RESET));
}

#[test]
#[serial]
fn test_print_empty_level_with_location() {
    let mut sink: Vec<u8> = Vec::new();
    let location = SourceLocation::new("main.rs", 7);
    print(LogLevel::Empty, true, "x", &PrintArgs::new(), &mut sink, location).unwrap();
    assert_eq!(
        output(&sink),
        format!("{}x\x1b[2m @ main.rs:7{}\n", RESET, RESET)
    );
}

#[test]
#[serial]
fn test_print_macro_captures_location() {
    let mut sink: Vec<u8> = Vec::new();
    crate::print_warn!(sink: &mut sink, "{} {}", "macro", 1).unwrap();
    let line = line!() - 1;

    let text = output(&sink);
    assert!(text.starts_with("\x1b[33m[WARN] \x1b[0m macro 1"));
    assert!(text.ends_with(&format!("{}:{}{}\n", file!(), line, RESET)));
}

// ============================================================================
// GATING TESTS
// ============================================================================

#[test]
#[serial]
fn test_print_log_levels() {
    let empty = PrintArgs::new();
    let mut sink: Vec<u8> = Vec::new();

    set_current_log_level(LogLevel::Debug);

    print_debug("", &empty, &mut sink).unwrap();
    if DEBUG {
        assert!(output(&sink).contains("[DEBUG]"));
    } else {
        assert!(sink.is_empty());
    }

    sink.clear();
    print_info("", &empty, &mut sink).unwrap();
    assert!(output(&sink).contains("[INFO]"));

    sink.clear();
    print_warn("", &empty, &mut sink).unwrap();
    assert!(output(&sink).contains("[WARN]"));

    sink.clear();
    print_error("", &empty, &mut sink).unwrap();
    assert!(output(&sink).contains("[ERROR]"));

    set_current_log_level(LogLevel::Info);
    sink.clear();
    print_debug("", &empty, &mut sink).unwrap();
    assert!(sink.is_empty());

    set_current_log_level(LogLevel::Warn);
    sink.clear();
    print_debug("", &empty, &mut sink).unwrap();
    print_info("", &empty, &mut sink).unwrap();
    assert!(sink.is_empty());

    set_current_log_level(LogLevel::Error);
    sink.clear();
    print_debug("", &empty, &mut sink).unwrap();
    print_info("", &empty, &mut sink).unwrap();
    print_warn("", &empty, &mut sink).unwrap();
    assert!(sink.is_empty());

    set_current_log_level(LogLevel::Empty);
    sink.clear();
    print_debug("", &empty, &mut sink).unwrap();
    print_info("", &empty, &mut sink).unwrap();
    print_warn("", &empty, &mut sink).unwrap();
    print_error("", &empty, &mut sink).unwrap();
    assert!(sink.is_empty());

    print_simple("", &empty, &mut sink).unwrap();
    assert!(!sink.is_empty());

    reset_log_level();
}

#[test]
#[serial]
fn test_gated_print_skips_rendering() {
    set_current_log_level(LogLevel::Error);

    // Broken format string, but the gate drops the message first
    let mut sink: Vec<u8> = Vec::new();
    assert!(print_info("{}", &PrintArgs::new(), &mut sink).is_ok());
    assert!(sink.is_empty());

    reset_log_level();
}

#[test]
#[serial]
fn test_emit_respects_gate() {
    let location = SourceLocation::new("lib.rs", 1);
    let mut sink: Vec<u8> = Vec::new();

    set_current_log_level(LogLevel::Error);
    emit(LogLevel::Warn, false, "dropped", &mut sink, location).unwrap();
    assert!(sink.is_empty());

    emit(LogLevel::Error, false, "kept {}", &mut sink, location).unwrap();
    // emit does not render placeholders
    assert_eq!(output(&sink), "\x1b[31m[ERROR]\x1b[0m kept {}\n");

    reset_log_level();
}

// ============================================================================
// ERROR TESTS
// ============================================================================

#[test]
#[serial]
fn test_format_error_writes_nothing() {
    let mut sink: Vec<u8> = Vec::new();
    let args = crate::print_args!["a"];

    let result = print_simple("{} {}", &args, &mut sink);

    assert!(matches!(
        result,
        Err(Error::Format(FormatError::IndexOutOfBounds { index: 1, len: 1 }))
    ));
    assert!(sink.is_empty());
}

struct FailingSink;

impl std::io::Write for FailingSink {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
#[serial]
fn test_sink_error_is_returned() {
    let result = print_simple("text", &PrintArgs::new(), &mut FailingSink);
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
#[serial]
fn test_print_is_written_once() {
    let mut sink: Vec<u8> = Vec::new();
    let args = crate::print_args![1, 2, 3];
    print_simple("{0} + {1} = {2}", &args, &mut sink).unwrap();
    print_simple("{0} + {1} = {2}", &args, &mut sink).unwrap();
    assert_eq!(
        output(&sink),
        format!("{r}1 + 2 = 3\n{r}1 + 2 = 3\n", r = RESET)
    );
}
