//! Create command - create a repository on GitHub.

use anyhow::Result;
use std::io::{BufRead, Write};

use super::repo::ensure_remote;
use crate::cli::session::Session;
use crate::github::{CreatedRepository, GitHubClient};

/// Executes the create-repository action.
///
/// After a successful creation inside an existing repository, offers to
/// register the new repository as the configured remote.
pub fn run<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<()> {
    let name = session.term.ask("Enter the name of the new repository: ")?;
    if name.is_empty() {
        session.notice("No name given. Operation cancelled.")?;
        return Ok(());
    }

    let default = session.config.private_by_default;
    let private = session
        .term
        .confirm_or("Should the repository be private?", default)?;

    let Some(repo) = create_repository(session, &name, private)? else {
        return Ok(());
    };
    session.term.say(format!("Repository URL: {}", repo.html_url))?;

    if let Some(clone_url) = repo.clone_url {
        if session.git.is_repository() {
            let prompt = format!("Add it as the '{}' remote?", session.config.remote);
            if session.term.confirm_or(&prompt, true)? {
                ensure_remote(session, &clone_url)?;
            }
        }
    }

    Ok(())
}

/// Creates `name` on GitHub with the stored token.
///
/// Returns `None` after reporting the reason when credentials are missing
/// or GitHub refuses the request.
pub fn create_repository<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    name: &str,
    private: bool,
) -> Result<Option<CreatedRepository>> {
    let Some(credentials) = session.require_credentials()? else {
        return Ok(None);
    };

    let client = GitHubClient::with_url(&session.config.api_url, &credentials.token)?;
    match client.create_repository(name, private) {
        Ok(repo) => {
            session.success(format!("Repository '{name}' created successfully!"))?;
            Ok(Some(repo))
        }
        Err(e) => {
            session.failure(format!("Failed to create repository: {e}"))?;
            Ok(None)
        }
    }
}
