//! State shared by every menu action.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fmt::Display;
use std::io::{BufRead, Write};

use super::terminal::Terminal;
use crate::config::Config;
use crate::credentials::{CredentialPair, CredentialsStore};
use crate::git::Git;

/// Everything an action needs: the terminal, git bound to the working
/// directory, the credential store and the configuration.
pub struct Session<R, W> {
    pub term: Terminal<R, W>,
    pub git: Git,
    pub credentials: CredentialsStore,
    pub config: Config,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(term: Terminal<R, W>, git: Git, credentials: CredentialsStore, config: Config) -> Self {
        Self {
            term,
            git,
            credentials,
            config,
        }
    }

    /// Prints a success line.
    pub fn success(&mut self, message: impl Display) -> Result<()> {
        self.term.say(message.to_string().green())
    }

    /// Prints a cancellation or warning line.
    pub fn notice(&mut self, message: impl Display) -> Result<()> {
        self.term.say(message.to_string().yellow())
    }

    /// Prints a failure line.
    pub fn failure(&mut self, message: impl Display) -> Result<()> {
        self.term.say(message.to_string().red())
    }

    /// Loads stored credentials, telling the user when there are none.
    pub fn require_credentials(&mut self) -> Result<Option<CredentialPair>> {
        let credentials = self
            .credentials
            .load()
            .context("Failed to read stored credentials")?;

        if credentials.is_none() {
            self.notice("Credentials not found. Please store them first.")?;
        }
        Ok(credentials)
    }
}
