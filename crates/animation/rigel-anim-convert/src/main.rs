use std::env;
use std::process::ExitCode;

use anyhow::{Context, Result};
use rigel_anim_convert::{logging, parse_args, run, Command, USAGE};
use rigel_anim_core::TOOL_TAG;

fn main() -> ExitCode {
    logging::enable_tracing();
    match try_main() {
        Ok(status) => ExitCode::from(status),
        Err(err) => {
            eprintln!("[{TOOL_TAG}] {err:#}");
            ExitCode::from(2)
        }
    }
}

fn try_main() -> Result<u8> {
    let command = match parse_args(env::args().skip(1)) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("{USAGE}\n");
            return Err(err);
        }
    };
    match command {
        Command::Help => {
            println!("{USAGE}");
            Ok(0)
        }
        Command::Convert(config) => {
            let report = run(&config)
                .with_context(|| format!("cannot convert {}", config.input.display()))?;
            Ok(report.exit_code())
        }
    }
}
