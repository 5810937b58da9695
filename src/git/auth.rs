//! Push authentication.
//!
//! Credentials reach `git push` through environment variables scoped to the
//! child process (`GIT_CONFIG_COUNT` / `GIT_CONFIG_KEY_n` / `GIT_CONFIG_VALUE_n`),
//! never through argv or the remote URL.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::credentials::CredentialPair;

/// Environment variable the inline credential helper reads the username from.
pub const USERNAME_ENV: &str = "PUSHER_GIT_USERNAME";

/// Environment variable the inline credential helper reads the token from.
pub const TOKEN_ENV: &str = "PUSHER_GIT_TOKEN";

/// Answers `get` requests from the two variables above and ignores
/// `store`/`erase`.
const CREDENTIAL_HELPER: &str = "!f() { test \"$1\" = get || return 0; \
    echo \"username=${PUSHER_GIT_USERNAME}\"; \
    echo \"password=${PUSHER_GIT_TOKEN}\"; }; f";

/// How credentials are presented to the remote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PushAuth {
    /// `Authorization: Basic ...` sent via `http.extraHeader`.
    #[default]
    Header,
    /// An inline `credential.helper` that answers with the stored pair.
    CredentialHelper,
}

impl PushAuth {
    /// Environment variables that authenticate one git invocation.
    pub fn env(&self, credentials: &CredentialPair) -> Vec<(String, String)> {
        match self {
            PushAuth::Header => vec![
                ("GIT_CONFIG_COUNT".to_string(), "1".to_string()),
                ("GIT_CONFIG_KEY_0".to_string(), "http.extraHeader".to_string()),
                (
                    "GIT_CONFIG_VALUE_0".to_string(),
                    format!("Authorization: {}", basic_auth_value(credentials)),
                ),
            ],
            PushAuth::CredentialHelper => vec![
                ("GIT_CONFIG_COUNT".to_string(), "2".to_string()),
                // An empty value clears helpers configured elsewhere.
                ("GIT_CONFIG_KEY_0".to_string(), "credential.helper".to_string()),
                ("GIT_CONFIG_VALUE_0".to_string(), String::new()),
                ("GIT_CONFIG_KEY_1".to_string(), "credential.helper".to_string()),
                ("GIT_CONFIG_VALUE_1".to_string(), CREDENTIAL_HELPER.to_string()),
                (USERNAME_ENV.to_string(), credentials.username.clone()),
                (TOKEN_ENV.to_string(), credentials.token.clone()),
            ],
        }
    }
}

impl std::fmt::Display for PushAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PushAuth::Header => write!(f, "header"),
            PushAuth::CredentialHelper => write!(f, "credential-helper"),
        }
    }
}

/// `Basic <base64(username:token)>`
fn basic_auth_value(credentials: &CredentialPair) -> String {
    let raw = format!("{}:{}", credentials.username, credentials.token);
    format!("Basic {}", STANDARD.encode(raw))
}
