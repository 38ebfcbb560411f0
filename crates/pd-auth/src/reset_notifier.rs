use pd_core::User;

use log::info;

/// Receives password reset requests.
///
/// This is the only place the outcome of an email lookup is visible; callers
/// of `forgot_password` never learn it.
pub trait PasswordResetNotifier: Send + Sync {
    fn reset_requested(&self, email: &str, account: Option<&User>);
}

/// Records reset requests in the application log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogResetNotifier;

impl PasswordResetNotifier for LogResetNotifier {
    fn reset_requested(&self, email: &str, account: Option<&User>) {
        match account {
            Some(user) => info!(
                "Password reset requested for {email} (account {}). A reset email would be sent.",
                user.id
            ),
            None => info!("Password reset requested for unregistered email {email}. No action taken."),
        }
    }
}
