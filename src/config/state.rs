// Application state module
// Read-only state shared by every request handler

use super::types::{Config, SecretsConfig};
use crate::auth::CredentialStore;

/// Application state
///
/// Constructed once at startup and never mutated afterwards, so handlers
/// share it through a plain `Arc` without any locking.
pub struct AppState {
    pub config: Config,
    pub secrets: SecretsConfig,
    pub credentials: CredentialStore,
}

impl AppState {
    pub fn new(config: Config, secrets: SecretsConfig, credentials: CredentialStore) -> Self {
        Self {
            config,
            secrets,
            credentials,
        }
    }
}
