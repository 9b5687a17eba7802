use std::process;
use tracing_subscriber::EnvFilter;
use uniter::cli::{Args, Command};

fn main() {
    let args = Args::parse_args();

    init_tracing(args.verbose);

    let command = Command::from_args(args);
    process::exit(command.run());
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the default level
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "uniter=debug" } else { "uniter=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
