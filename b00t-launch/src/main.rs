use anyhow::Result;
use b00t_launch::commands::{LaunchArgs, handle_launch_command};
use clap::Parser;

fn main() -> Result<()> {
    let args = LaunchArgs::parse();
    init_logging(args.verbose);

    handle_launch_command(&args)
}

/// tracing events reach env_logger through tracing's `log` feature
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}
