use pd_core::User;

/// Result of loading the user collection - distinguishes "empty" from "corrupt".
#[derive(Debug, Default)]
pub struct LoadResult {
    pub users: Vec<User>,
    /// Present if a stored collection existed but could not be read
    pub corruption_error: Option<String>,
}
