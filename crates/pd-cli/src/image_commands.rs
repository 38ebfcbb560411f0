use std::path::{Path, PathBuf};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum ImageCommands {
    /// Store a photo and print its key
    Save {
        /// Image file to store
        file: PathBuf,
        /// MIME type (guessed from the extension when omitted)
        #[arg(long)]
        mime: Option<String>,
    },
    /// Print a stored payload
    Get {
        key: String,
    },
    /// Delete a stored photo
    Remove {
        key: String,
    },
    /// Turn an animal's image reference into a displayable URL
    Resolve {
        reference: String,
        /// Breed name used for the placeholder
        #[arg(long)]
        breed: String,
    },
}

/// MIME type for common photo extensions.
pub fn guess_mime(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    match extension.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}
