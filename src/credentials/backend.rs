//! Secret store backends.

use keyring::Entry;
use std::cell::RefCell;
use std::collections::HashMap;

use super::CredentialError;

/// A flat key/value store for secrets.
pub trait SecretStore {
    /// Returns the value for `key`, or `None` if it has never been set.
    fn get(&self, key: &str) -> Result<Option<String>, CredentialError>;

    /// Sets `key` to `value`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), CredentialError>;
}

/// OS keychain backend (macOS Keychain, Secret Service, Windows Credential Manager).
pub struct KeyringStore {
    service: String,
}

impl KeyringStore {
    pub fn new(service: &str) -> Self {
        Self {
            service: service.to_string(),
        }
    }

    fn entry(&self, key: &str) -> Result<Entry, CredentialError> {
        Ok(Entry::new(&self.service, key)?)
    }
}

impl SecretStore for KeyringStore {
    fn get(&self, key: &str) -> Result<Option<String>, CredentialError> {
        match self.entry(key)?.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CredentialError> {
        self.entry(key)?.set_password(value)?;
        Ok(())
    }
}

/// In-process backend. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SecretStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CredentialError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CredentialError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
