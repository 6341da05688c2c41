//! jac_print demo
//!
//! Prints one line per entry point. Set `JAC_LOG` (debug, info, warn, error,
//! off) to change the threshold.

use jac_print::jac::{self, LogLevel, PrintArg, PrintLogger};
use jac_print::{print_args, print_debug, print_error, print_info, print_simple, print_warn};

struct WindowParams {
    width: u32,
    height: u32,
}

impl PrintArg for WindowParams {
    fn to_print_arg(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

fn main() -> jac::Result<()> {
    jac::set_current_log_level(LogLevel::Debug);
    PrintLogger::init_from_env("JAC_LOG")?;

    let params = WindowParams {
        width: 400,
        height: 300,
    };

    print_simple!("jac_print demo, threshold {}", jac::current_log_level().name())?;
    print_debug!("This uses debug alias.")?;
    print_info!("Window created: {}", params)?;
    print_warn!("{0} + {1} = {2}", 1, 2, 3)?;

    let vec = [1.5, 2.5, 3.5];
    jac::print(
        LogLevel::Info,
        false,
        "vec.len() = {3}, vec = {{ {} {} {} }}",
        &print_args![vec[0], vec[1], vec[2], vec.len()],
        &mut std::io::stdout(),
        jac::SourceLocation::caller(),
    )?;

    log::info!("Routed through the log facade");

    if let Err(e) = print_info!("{} {}", "one argument") {
        print_error!("Format failed: {}", e.to_string())?;
    }

    Ok(())
}
