//! Argument collection for the print functions
//!
//! Every value passed to a print call is converted to text up front, in call
//! order. The conversion is driven by the [`PrintArg`] trait: a type without an
//! implementation is rejected at compile time.

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

use crate::error::FormatError;
use crate::format;

/// Conversion of a single print argument to text
///
/// Implemented for text types, `bool`, `char` and the primitive numbers.
/// Implement it for your own types to make them printable.
///
/// # Example
///
/// ```
/// use jac_print::jac::{PrintArg, PrintArgs};
///
/// struct Version(u32, u32);
///
/// impl PrintArg for Version {
///     fn to_print_arg(&self) -> String {
///         format!("v{}.{}", self.0, self.1)
///     }
/// }
///
/// let args = PrintArgs::new().with(&Version(1, 2));
/// assert_eq!(args.render("{}").unwrap(), "v1.2");
/// ```
pub trait PrintArg {
    fn to_print_arg(&self) -> String;
}

// ===== TEXT =====

impl PrintArg for str {
    fn to_print_arg(&self) -> String {
        self.to_string()
    }
}

impl PrintArg for String {
    fn to_print_arg(&self) -> String {
        self.clone()
    }
}

impl PrintArg for Cow<'_, str> {
    fn to_print_arg(&self) -> String {
        self.to_string()
    }
}

// ===== BOOL / CHAR =====

impl PrintArg for bool {
    fn to_print_arg(&self) -> String {
        let text = if *self { "true" } else { "false" };
        text.to_string()
    }
}

impl PrintArg for char {
    fn to_print_arg(&self) -> String {
        self.to_string()
    }
}

// ===== NUMBERS =====

macro_rules! impl_print_arg_integer {
    ($($t:ty),*) => {
        $(
            impl PrintArg for $t {
                fn to_print_arg(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_print_arg_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Fixed six fractional digits, printf "%f" spelling for non-finite values
fn float_to_print_arg(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "inf" } else { "-inf" };
        text.to_string()
    } else {
        format!("{:.6}", value)
    }
}

impl PrintArg for f32 {
    fn to_print_arg(&self) -> String {
        float_to_print_arg(f64::from(*self))
    }
}

impl PrintArg for f64 {
    fn to_print_arg(&self) -> String {
        float_to_print_arg(*self)
    }
}

// ===== WRAPPERS =====

impl<T: PrintArg + ?Sized> PrintArg for &T {
    fn to_print_arg(&self) -> String {
        (**self).to_print_arg()
    }
}

impl<T: PrintArg + ?Sized> PrintArg for &mut T {
    fn to_print_arg(&self) -> String {
        (**self).to_print_arg()
    }
}

impl<T: PrintArg + ?Sized> PrintArg for Box<T> {
    fn to_print_arg(&self) -> String {
        (**self).to_print_arg()
    }
}

impl<T: PrintArg + ?Sized> PrintArg for Rc<T> {
    fn to_print_arg(&self) -> String {
        (**self).to_print_arg()
    }
}

impl<T: PrintArg + ?Sized> PrintArg for Arc<T> {
    fn to_print_arg(&self) -> String {
        (**self).to_print_arg()
    }
}

// ===== PRINT ARGS =====

/// Ordered, already-converted arguments of one print call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrintArgs {
    values: Vec<String>,
}

impl PrintArgs {
    /// Empty argument list
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Append one argument (builder style)
    pub fn with<T: PrintArg + ?Sized>(mut self, value: &T) -> Self {
        self.push(value);
        self
    }

    /// Append one argument
    pub fn push<T: PrintArg + ?Sized>(&mut self, value: &T) {
        self.values.push(value.to_print_arg());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Converted values, in call order
    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    /// Render `format_string` against these arguments
    pub fn render(&self, format_string: &str) -> std::result::Result<String, FormatError> {
        format::render(format_string, &self.values)
    }
}

impl From<Vec<String>> for PrintArgs {
    fn from(values: Vec<String>) -> Self {
        Self { values }
    }
}

impl<T: PrintArg> FromIterator<T> for PrintArgs {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|value| value.to_print_arg()).collect(),
        }
    }
}

/// Build a [`PrintArgs`] from zero or more heterogeneous values
///
/// # Example
///
/// ```
/// use jac_print::print_args;
///
/// let args = print_args![1, "two", 3.0, true, 'x'];
/// assert_eq!(args.values(), ["1", "two", "3.000000", "true", "x"]);
/// ```
#[macro_export]
macro_rules! print_args {
    () => {
        $crate::jac::PrintArgs::new()
    };
    ($($arg:expr),+ $(,)?) => {{
        let mut args = $crate::jac::PrintArgs::new();
        $( args.push(&$arg); )+
        args
    }};
}

#[cfg(test)]
#[path = "print_arg_tests.rs"]
mod tests;
