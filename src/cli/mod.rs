use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

mod args;
mod commands;
mod exit_status;
mod report;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(Arguments {
        command: Some(command),
    }) = args.with_command_or_help()
    else {
        return Ok(ExitStatus::Success);
    };

    let result = match command {
        Command::Extract(cmd) => commands::extract::extract(cmd)?,
        Command::Init => commands::init::init()?,
    };
    report::print(&result);

    Ok(result.exit_status())
}

/// Install the stderr log subscriber. `RUST_LOG` takes precedence over `verbose`.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::env::var_os("NO_COLOR").is_none())
        .without_time()
        .with_target(false)
        .try_init();
}
