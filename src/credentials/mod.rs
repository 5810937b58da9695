//! Credential storage for GitHub authentication.
//!
//! A username and personal access token are kept as two separate entries in
//! the OS keychain. Every action that talks to GitHub loads them through
//! [`CredentialsStore`].
//!
//! # Submodules
//!
//! - `backend` - the [`SecretStore`] trait with keyring and in-memory backends

pub mod backend;

pub use backend::{KeyringStore, MemoryStore, SecretStore};

/// Default keychain service name.
pub const KEYRING_SERVICE: &str = "git";

/// Entry name holding the GitHub username.
pub const KEYRING_USERNAME_ENTRY: &str = "username";

/// Entry name holding the personal access token.
pub const KEYRING_TOKEN_ENTRY: &str = "token";

/// Errors raised by secret store backends.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    /// The OS keychain rejected the operation.
    #[error("Credential storage error: {0}")]
    KeyringError(String),
}

impl From<keyring::Error> for CredentialError {
    fn from(err: keyring::Error) -> Self {
        CredentialError::KeyringError(err.to_string())
    }
}

/// A GitHub username and access token.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialPair {
    pub username: String,
    pub token: String,
}

impl CredentialPair {
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            token: token.into(),
        }
    }
}

// The token must never end up in logs.
impl std::fmt::Debug for CredentialPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialPair")
            .field("username", &self.username)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Reads and writes the credential pair through a [`SecretStore`].
pub struct CredentialsStore {
    backend: Box<dyn SecretStore>,
}

impl CredentialsStore {
    /// Creates a store backed by the OS keychain under `service`.
    pub fn keyring(service: &str) -> Self {
        Self::with_backend(KeyringStore::new(service))
    }

    /// Creates a store over an arbitrary backend.
    pub fn with_backend(backend: impl SecretStore + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Stores both entries, silently replacing previous values.
    pub fn store(&self, credentials: &CredentialPair) -> Result<(), CredentialError> {
        self.backend
            .set(KEYRING_USERNAME_ENTRY, &credentials.username)?;
        self.backend.set(KEYRING_TOKEN_ENTRY, &credentials.token)?;
        tracing::debug!(username = %credentials.username, "Stored credentials");
        Ok(())
    }

    /// Loads the credential pair.
    ///
    /// Returns `None` if either entry is missing or blank.
    pub fn load(&self) -> Result<Option<CredentialPair>, CredentialError> {
        let username = self.backend.get(KEYRING_USERNAME_ENTRY)?;
        let token = self.backend.get(KEYRING_TOKEN_ENTRY)?;

        match (username, token) {
            (Some(username), Some(token))
                if !username.trim().is_empty() && !token.trim().is_empty() =>
            {
                Ok(Some(CredentialPair::new(username.trim(), token.trim())))
            }
            _ => Ok(None),
        }
    }
}
