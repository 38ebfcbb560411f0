//! pashudhan - livestock record-keeping CLI
//!
//! Runs the account and image operations against the local store file.
//!
//! # Examples
//!
//! ```bash
//! # Register and sign in
//! pashudhan account signup --username farmer1 --email f1@example.com --password pass123
//!
//! # Store a photo and resolve it for display
//! pashudhan image save cow.jpg
//! pashudhan image resolve pashudhan_image_1718000000000 --breed Gir --pretty
//! ```

use pd_cli::{App, AppResult, Cli, logger};
use pd_config::Config;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, error};
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logger::initialize(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    ) {
        eprintln!("Warning: {}", e.user_message());
    }
    config.log_summary();

    let result = match App::from_config(&config) {
        Ok(app) => app.run(cli.command).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(value) => print_json(&value, cli.pretty),
        Err(e) => {
            error!("{} failed: {e}", e.error_code());
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

fn load_config() -> AppResult<Config> {
    let config = Config::load()?;
    config.validate()?;
    debug!("Config directory: {}", Config::config_dir()?.display());
    Ok(config)
}

fn print_json(value: &Value, pretty: bool) -> ExitCode {
    let output = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    match output {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing response: {}", e);
            ExitCode::FAILURE
        }
    }
}
