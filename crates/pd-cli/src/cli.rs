use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "pashudhan")]
#[command(about = "Livestock record-keeping: accounts, sessions and stored photos")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
