//! Store command - save the GitHub username and token in the OS keychain.
//!
//! Existing values are replaced without confirmation.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use crate::cli::session::Session;
use crate::credentials::CredentialPair;

/// Executes the store-credentials action.
pub fn run<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    let username = session.term.ask("Enter your GitHub username: ")?;
    let token = session
        .term
        .secret("Enter your GitHub personal access token: ")?;

    if username.is_empty() || token.is_empty() {
        session.notice("Both a username and a token are required. Nothing was stored.")?;
        return Ok(());
    }

    session
        .credentials
        .store(&CredentialPair::new(username, token))
        .context("Failed to store credentials")?;

    session.success("Credentials stored securely!")
}
