/*!
# jac_print

Leveled console printing with a small format-string engine.

```text
print_info!("{0} + {1} = {2}", 1, 2, 3)
    -> [INFO]  1 + 2 = 3 @ src/main.rs:12
```

## Architecture

- **PrintArgs**: converts each argument to text, in call order (`PrintArg` trait)
- **render**: substitutes `{}`, `{N}`, `{{` and `}}` in a format string
- **Log gate**: process-wide threshold, checked before anything is rendered
- **print**: decorates the rendered line (heading, location) and writes it to a sink
- **PrintLogger**: routes the `log` facade through the same gate and format
*/

// Internal modules
mod error;
mod format;
mod log;
mod logger;
mod print;
mod print_arg;

// Main jac namespace module
pub mod jac {
    // Error types
    pub use crate::error::{Error, FormatError, Result};

    // Format engine
    pub use crate::format::render;
    pub use crate::print_arg::{PrintArg, PrintArgs};

    // Log gate
    pub use crate::log::{
        current_log_level, default_log_level, is_enabled, reset_log_level,
        set_current_log_level, LogLevel, DEBUG,
    };

    // Printing
    pub use crate::print::{
        decorate, emit, heading, print, print_debug, print_error, print_info, print_simple,
        print_warn, SourceLocation,
    };

    // `log` facade bridge
    pub use crate::logger::{to_log_level, PrintLogger};
}
