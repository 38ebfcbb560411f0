use crate::{account_commands::AccountCommands, image_commands::ImageCommands};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Account and session operations
    Account {
        #[command(subcommand)]
        action: AccountCommands,
    },

    /// Stored image operations
    Image {
        #[command(subcommand)]
        action: ImageCommands,
    },
}
