use clap::Subcommand;

#[derive(Subcommand)]
pub enum AccountCommands {
    /// Register an account and sign in
    Signup {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign in
    Login {
        /// Username, or email when signing in with Google
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out
    Logout,
    /// Show the signed-in account
    Whoami,
    /// Change an account's password
    ChangePassword {
        #[arg(long)]
        username: String,
        #[arg(long)]
        current: String,
        #[arg(long)]
        new: String,
    },
    /// Request a password reset email
    ForgotPassword {
        #[arg(long)]
        email: String,
    },
}
