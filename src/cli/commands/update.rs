//! Update command - commit every change and push to the existing remote.

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::cli::session::Session;

/// Executes the update action.
///
/// Stages everything, commits with the user's message and pushes the
/// current branch to the configured remote's URL.
pub fn run<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    if !session.git.is_repository() {
        session.notice("This is not a Git repository. Please initialize it first.")?;
        return Ok(());
    }

    let Some(credentials) = session.require_credentials()? else {
        return Ok(());
    };

    let remote = session.config.remote.clone();
    let Some(url) = session.git.remote_url(&remote) else {
        session.notice("No remote repository found. Please set up the remote repository first.")?;
        return Ok(());
    };

    if let Err(e) = session.git.stage_all() {
        session.failure(format!("Failed to stage changes: {}", e.message))?;
        return Ok(());
    }
    session.success("All changes staged successfully.")?;

    let message = session.term.ask("Enter a commit message for the changes: ")?;
    if let Err(e) = session.git.commit(&message) {
        session.failure(format!(
            "Failed to commit changes. Ensure there are changes to commit. ({})",
            e.message
        ))?;
        return Ok(());
    }

    let auth = session.config.push_auth;
    match session.git.push(&url, "HEAD", false, &credentials, auth) {
        Ok(()) => session.success("Changes pushed successfully!"),
        Err(e) => session.failure(format!(
            "Failed to push changes to the repository. ({})",
            e.message
        )),
    }
}
