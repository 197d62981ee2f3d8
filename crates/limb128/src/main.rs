//! limb128: apply one 128-bit operation to literal operands.

use limb128_lib::{app, config, errors};
use tracing_subscriber::EnvFilter;

fn main() {
    let config = config::AppConfig::parse();

    // Logs go to stderr so stdout stays machine-readable.
    let default_level = if config.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    if let Err(err) = app::run(&config) {
        eprintln!("error: {err:#}");
        std::process::exit(errors::exit_code(&err));
    }
}
