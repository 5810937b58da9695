//! Push command - stage selected files, commit and push to GitHub.
//!
//! The flow stops at the first failure and returns to the menu. Nothing
//! touches the repository until credentials and files are known to exist.

use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{BufRead, Write};

use super::repo::{check_identity, ensure_remote, ensure_repository, verify_initial_commit};
use crate::cli::session::Session;
use crate::config::Config;
use crate::git::InitialCommit;
use crate::workdir::{list_entries, select_entries};

/// Executes the push flow.
pub fn run<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    let Some(credentials) = session.require_credentials()? else {
        return Ok(());
    };

    let files = list_entries(session.git.dir()).context("Failed to list files")?;
    if files.is_empty() {
        session.notice("No files in the current directory.")?;
        return Ok(());
    }

    if !ensure_repository(session)? || !check_identity(session)? {
        return Ok(());
    }

    let Some(state) = verify_initial_commit(session)? else {
        return Ok(());
    };

    // A fresh initial commit already contains every file.
    if state == InitialCommit::Existing && !stage_and_commit(session, &files)? {
        return Ok(());
    }

    let target = session
        .term
        .ask("Enter the name of the repository to push to (or its URL or path): ")?;
    if target.is_empty() {
        session.notice("No repository given. Operation cancelled.")?;
        return Ok(());
    }
    let url = resolve_remote_url(&session.config, &credentials.username, &target);

    // The push below targets the URL itself, so a conflicting remote
    // must not strand the commit made above.
    if !ensure_remote(session, &url)? {
        session.notice(format!("Continuing with a direct push to {url}."))?;
    }

    let branch = session.config.branch.clone();
    if session.git.current_branch().as_deref() != Some(branch.as_str()) {
        if let Err(e) = session.git.rename_branch(&branch) {
            session.failure(format!("Failed to set the branch to '{branch}': {}", e.message))?;
            return Ok(());
        }
    }

    let auth = session.config.push_auth;
    match session.git.push(&url, &branch, true, &credentials, auth) {
        Ok(()) => session.success("Files pushed successfully!"),
        Err(e) => session.failure(format!(
            "Failed to push changes. Check your repository and branch setup. ({})",
            e.message
        )),
    }
}

/// Lists the files, stages the user's selection and commits it.
///
/// Returns false when the selection is invalid or the commit fails.
fn stage_and_commit<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    files: &[String],
) -> Result<bool> {
    session.term.blank()?;
    session.term.say("Available files:".bold())?;
    for (i, file) in files.iter().enumerate() {
        session.term.say(format!("{}. {}", i + 1, file))?;
    }

    let input = session
        .term
        .ask("\nEnter the numbers of the files to add (comma-separated, e.g., 1,3): ")?;
    let selected = select_entries(&input, files);
    if selected.is_empty() {
        session.notice("Invalid input. No files selected. Operation cancelled.")?;
        return Ok(false);
    }

    // Best effort: one failed path does not stop the others.
    for file in &selected {
        if let Err(e) = session.git.stage(file) {
            session.failure(format!("Failed to add {file}: {}", e.message))?;
        }
    }

    let message = session.term.ask("Enter a commit message: ")?;
    if let Err(e) = session.git.commit(&message) {
        session.failure(format!("Commit failed: {}", e.message))?;
        return Ok(false);
    }

    session.success("Changes committed.")?;
    Ok(true)
}

/// Uses `input` as-is when it already looks like a remote location,
/// otherwise builds the hosted URL for `username/input`.
pub fn resolve_remote_url(config: &Config, username: &str, input: &str) -> String {
    let is_location = input.contains("://")
        || input.starts_with("git@")
        || input.starts_with("./")
        || input.starts_with("../")
        || std::path::Path::new(input).is_absolute();

    if is_location {
        input.to_string()
    } else {
        config.repository_url(username, input.trim_end_matches(".git"))
    }
}
