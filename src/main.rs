//! docchat CLI entry point.

use clap::Parser;

use docchat::cli::{handle_error, run, Cli};
use docchat::infrastructure::logging::{LogConfig, LoggerImpl};

fn main() {
    let cli = Cli::parse();

    let config = cli
        .load_config()
        .unwrap_or_else(|err| handle_error(&err, cli.json));

    let logger = LogConfig::from_settings(&config.logging)
        .and_then(|log_config| LoggerImpl::init(&log_config))
        .unwrap_or_else(|err| handle_error(&err, cli.json));

    let result = run(&cli.command(), &config, cli.json);

    // flush file logs before a possible process::exit
    drop(logger);

    if let Err(err) = result {
        handle_error(&err, cli.json);
    }
}
