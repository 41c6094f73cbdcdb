use std::process;
use tracing_subscriber::EnvFilter;

use required_exports::cli::{Args, Command};

fn main() {
    let args = Args::parse_args();
    init_logging(args.verbose);

    let command = Command::from_args(args);
    process::exit(command.run());
}

/// Log to stderr so stdout carries only the report
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
