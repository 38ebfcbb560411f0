use crate::account_commands::AccountCommands;
use crate::commands::Commands;
use crate::image_commands::{ImageCommands, guess_mime};
use crate::{AppError, AppResult};

use pd_auth::{AuthService, CredentialHasher, HashParams};
use pd_config::Config;
use pd_core::User;
use pd_images::{ImageError, ImageStore, encode_data_url};
use pd_storage::{FileStore, KeyValueStore};

use std::path::Path;
use std::sync::Arc;

use log::debug;
use serde_json::{Value, json};

/// Services sharing one key-value store.
pub struct App {
    auth: AuthService,
    images: ImageStore,
    max_upload_bytes: usize,
}

impl App {
    /// Opens the store file named by the configuration.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let path = config.storage_path()?;
        Self::open(&path, config)
    }

    /// Opens `path` as the backing store, ignoring `config.storage.path`.
    pub fn open(path: &Path, config: &Config) -> AppResult<Self> {
        debug!("Opening store at {}", path.display());
        let store = FileStore::open(path, Some(config.storage.capacity_bytes))?;
        Self::with_store(Arc::new(store), config)
    }

    pub fn with_store(store: Arc<dyn KeyValueStore>, config: &Config) -> AppResult<Self> {
        let hasher = CredentialHasher::new(HashParams {
            memory_kib: config.auth.hash_memory_kib,
            iterations: config.auth.hash_iterations,
            parallelism: config.auth.hash_parallelism,
        })?;

        Ok(Self {
            auth: AuthService::new(store.clone(), hasher, config.auth.latency()),
            images: ImageStore::new(store),
            max_upload_bytes: config.images.max_upload_bytes,
        })
    }

    /// Runs one command and returns its JSON result.
    pub async fn run(&self, command: Commands) -> AppResult<Value> {
        match command {
            Commands::Account { action } => self.run_account(action).await,
            Commands::Image { action } => self.run_image(action),
        }
    }

    async fn run_account(&self, action: AccountCommands) -> AppResult<Value> {
        match action {
            AccountCommands::Signup {
                username,
                email,
                password,
            } => {
                let user = self.auth.signup(&username, &email, &password).await?;
                Ok(json!({ "user": user_json(&user) }))
            }
            AccountCommands::Login { username, password } => {
                let user = self.auth.login(&username, &password).await?;
                Ok(json!({ "user": user_json(&user) }))
            }
            AccountCommands::Logout => {
                self.auth.logout();
                Ok(json!({ "signed_out": true }))
            }
            AccountCommands::Whoami => {
                let user = self.auth.current_user();
                Ok(json!({ "user": user.as_ref().map(user_json) }))
            }
            AccountCommands::ChangePassword {
                username,
                current,
                new,
            } => {
                self.auth.change_password(&username, &current, &new).await?;
                Ok(json!({ "password_changed": true }))
            }
            AccountCommands::ForgotPassword { email } => {
                self.auth.forgot_password(&email).await;
                Ok(json!({
                    "message": "If an account exists for this email, a reset link has been sent."
                }))
            }
        }
    }

    fn run_image(&self, action: ImageCommands) -> AppResult<Value> {
        match action {
            ImageCommands::Save { file, mime } => {
                let mime = match mime {
                    Some(mime) => mime,
                    None => guess_mime(&file)
                        .map(String::from)
                        .ok_or_else(|| ImageError::unsupported_type(file.display().to_string()))?,
                };
                if !mime.starts_with("image/") {
                    return Err(ImageError::unsupported_type(mime).into());
                }

                let bytes = std::fs::read(&file).map_err(|e| AppError::io(&file, e))?;
                if bytes.len() > self.max_upload_bytes {
                    return Err(ImageError::too_large(bytes.len(), self.max_upload_bytes).into());
                }

                let key = self.images.save_image(&encode_data_url(&mime, &bytes))?;
                Ok(json!({ "key": key.as_str() }))
            }
            ImageCommands::Get { key } => {
                let payload = self.images.get_image(&key);
                Ok(json!({ "key": key, "payload": payload }))
            }
            ImageCommands::Remove { key } => {
                self.images.remove_image(&key);
                Ok(json!({ "removed": key }))
            }
            ImageCommands::Resolve { reference, breed } => {
                let url = self.images.resolve(&reference, &breed);
                Ok(json!({ "url": url }))
            }
        }
    }
}

/// Public view of an account; the stored credential is never printed.
fn user_json(user: &User) -> Value {
    json!({
        "id": user.id,
        "username": user.username,
        "email": user.email,
        "source": user.source().as_str(),
    })
}
