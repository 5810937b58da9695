//! Repository preconditions shared by the push flow.

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::cli::session::Session;
use crate::git::{InitialCommit, RemoteStatus};

/// Message used for the automatic first commit.
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

/// Makes sure the working directory is a repository, offering `git init`.
///
/// Returns false when the user declines or initialisation fails.
pub fn ensure_repository<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<bool> {
    if session.git.is_repository() {
        return Ok(true);
    }

    session.notice("The current directory is not a Git repository.")?;
    if !session
        .term
        .confirm("Would you like to initialize a new Git repository here?")?
    {
        return Ok(false);
    }

    match session.git.init() {
        Ok(()) => {
            session.success("Initialized an empty Git repository.")?;
            Ok(true)
        }
        Err(e) => {
            session.failure(format!("Failed to initialize Git repository: {}", e.message))?;
            Ok(false)
        }
    }
}

/// Checks `user.name`/`user.email`, prompting for and saving them globally
/// when either is missing.
///
/// Returns false if the identity could not be configured.
pub fn check_identity<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<bool> {
    let identity = session.git.identity();
    if identity.is_complete() {
        session.term.say(format!("Git identity found: {identity}"))?;
        return Ok(true);
    }

    session.notice("Git identity is not set. Let's configure it now.")?;
    let name = session.term.ask("Enter your Git user name: ")?;
    let email = session.term.ask("Enter your Git user email: ")?;

    if name.is_empty() || email.is_empty() {
        session.failure("Both a name and an email are required.")?;
        return Ok(false);
    }

    match session.git.set_global_identity(&name, &email) {
        Ok(()) => {
            session.success("Git identity configured successfully!")?;
            Ok(true)
        }
        Err(e) => {
            session.failure(format!("Failed to configure Git identity: {}", e.message))?;
            Ok(false)
        }
    }
}

/// Creates the first commit if the repository has none.
///
/// Returns `None` when the commit could not be created.
pub fn verify_initial_commit<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
) -> Result<Option<InitialCommit>> {
    if session.git.has_commits() {
        session.term.say("Existing commits found in the repository.")?;
        return Ok(Some(InitialCommit::Existing));
    }

    session
        .term
        .say("No commits found in the repository. Creating an initial commit.")?;
    match session.git.ensure_initial_commit(INITIAL_COMMIT_MESSAGE) {
        Ok(state) => {
            session.success("Initial commit created successfully!")?;
            Ok(Some(state))
        }
        Err(e) => {
            session.failure(format!("Failed to create the initial commit: {}", e.message))?;
            Ok(None)
        }
    }
}

/// Adds `url` as the configured remote unless it is already known.
///
/// Returns false if the remote could not be added.
pub fn ensure_remote<R: BufRead, W: Write>(session: &mut Session<R, W>, url: &str) -> Result<bool> {
    let remote = session.config.remote.clone();
    match session.git.ensure_remote(&remote, url) {
        Ok(RemoteStatus::AlreadyPresent) => {
            session.term.say("Remote repository already exists.")?;
            Ok(true)
        }
        Ok(RemoteStatus::Added) => {
            session.success(format!("Remote repository added: {url}"))?;
            Ok(true)
        }
        Err(e) => {
            session.failure(format!(
                "Failed to add remote repository. Check your URL or access rights. ({})",
                e.message
            ))?;
            Ok(false)
        }
    }
}
