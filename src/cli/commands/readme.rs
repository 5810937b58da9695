//! README command - write README.md and commit it.

use anyhow::{Context, Result};
use std::fs;
use std::io::{BufRead, Write};

use crate::cli::session::Session;
use crate::cli::terminal::END_OF_BLOCK;

/// File written by this action, relative to the working directory.
pub const README_FILE: &str = "README.md";

/// Commit message for the README commit.
pub const README_COMMIT_MESSAGE: &str = "Add README.md";

/// Executes the README action.
pub fn run<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    let path = session.git.dir().join(README_FILE);

    if path.exists()
        && !session
            .term
            .confirm(&format!("{README_FILE} already exists. Overwrite?"))?
    {
        session.notice(format!(
            "Operation cancelled. {README_FILE} was not modified."
        ))?;
        return Ok(());
    }

    let content = session.term.read_block(&format!(
        "Enter the content for the {README_FILE} file (finish with a line containing only '{END_OF_BLOCK}'):"
    ))?;

    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    session.success(format!("{README_FILE} file created successfully!"))?;

    if let Err(e) = session.git.stage(README_FILE) {
        session.failure(format!("Failed to stage {README_FILE}: {}", e.message))?;
        return Ok(());
    }

    match session.git.commit(README_COMMIT_MESSAGE) {
        Ok(()) => session.success(format!("{README_FILE} committed successfully!")),
        Err(e) => session.failure(format!("Failed to commit {README_FILE}: {}", e.message)),
    }
}
