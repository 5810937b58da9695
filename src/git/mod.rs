//! Git integration.
//!
//! Wraps the system `git` binary for every repository probe and mutation
//! the session needs. All calls run in a fixed working directory and are
//! built from argument vectors.

pub mod auth;
pub mod runner;

use std::path::{Path, PathBuf};

use crate::credentials::CredentialPair;
use auth::PushAuth;
pub use runner::{run_command, CommandResult};

/// A git invocation that did not succeed.
#[derive(Debug, thiserror::Error)]
#[error("{command} failed: {message}")]
pub struct GitError {
    /// The command line, without any credentials.
    pub command: String,
    /// Diagnostic text captured from git.
    pub message: String,
}

/// Whether the repository had history before the push flow touched it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialCommit {
    /// At least one commit already existed.
    Existing,
    /// Everything was staged and committed as the first commit.
    Created,
}

/// Result of [`Git::ensure_remote`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteStatus {
    AlreadyPresent,
    Added,
}

/// Author identity as git sees it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Identity {
    /// True when both name and email are set.
    pub fn is_complete(&self) -> bool {
        self.name.is_some() && self.email.is_some()
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = self.name.as_deref().unwrap_or("?");
        match &self.email {
            Some(email) => write!(f, "{name} <{email}>"),
            None => write!(f, "{name}"),
        }
    }
}

/// Handle on the git binary bound to one working directory.
#[derive(Debug, Clone)]
pub struct Git {
    program: PathBuf,
    dir: PathBuf,
}

impl Git {
    /// Uses `git` from `PATH`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_program("git", dir)
    }

    /// Uses an explicit git executable.
    pub fn with_program(program: impl Into<PathBuf>, dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            dir: dir.into(),
        }
    }

    /// The working directory all commands run in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Runs `git <args>` and returns the raw result.
    pub fn output(&self, args: &[&str]) -> CommandResult {
        self.output_with_env(args, &[])
    }

    fn output_with_env(&self, args: &[&str], envs: &[(String, String)]) -> CommandResult {
        tracing::debug!("Running git {}", args.join(" "));

        let mut env = Vec::with_capacity(envs.len() + 1);
        env.push(("GIT_TERMINAL_PROMPT".to_string(), "0".to_string()));
        env.extend_from_slice(envs);

        let result = run_command(&self.program, args, &self.dir, &env);
        if !result.success {
            tracing::debug!("git {} failed: {}", args.join(" "), result.error_text());
        }
        result
    }

    /// Runs `git <args>`, converting a non-zero exit into [`GitError`].
    pub fn run(&self, args: &[&str]) -> Result<CommandResult, GitError> {
        Self::check(args, self.output(args))
    }

    fn check(args: &[&str], result: CommandResult) -> Result<CommandResult, GitError> {
        if result.success {
            Ok(result)
        } else {
            Err(GitError {
                command: format!("git {}", args.join(" ")),
                message: result.error_text(),
            })
        }
    }

    /// Reads a config value, `None` when unset or blank.
    fn config_value(&self, key: &str) -> Option<String> {
        let result = self.output(&["config", "--get", key]);
        let value = result.stdout_trimmed();
        (result.success && !value.is_empty()).then(|| value.to_string())
    }

    // ==================== Probes ====================

    /// True iff the working directory is inside a work tree.
    pub fn is_repository(&self) -> bool {
        let result = self.output(&["rev-parse", "--is-inside-work-tree"]);
        result.success && result.stdout_trimmed() == "true"
    }

    /// True iff `HEAD` points at a commit.
    pub fn has_commits(&self) -> bool {
        self.output(&["log", "-1", "--format=%H"]).success
    }

    /// Raw `git remote -v` listing.
    pub fn remotes(&self) -> Result<String, GitError> {
        Ok(self.run(&["remote", "-v"])?.stdout)
    }

    /// URL configured for `remote`, if any.
    pub fn remote_url(&self, remote: &str) -> Option<String> {
        self.config_value(&format!("remote.{remote}.url"))
    }

    /// Short name of the checked-out branch.
    pub fn current_branch(&self) -> Option<String> {
        let result = self.output(&["rev-parse", "--abbrev-ref", "HEAD"]);
        let branch = result.stdout_trimmed();
        (result.success && !branch.is_empty() && branch != "HEAD").then(|| branch.to_string())
    }

    /// Configured author identity, from any config scope.
    pub fn identity(&self) -> Identity {
        Identity {
            name: self.config_value("user.name"),
            email: self.config_value("user.email"),
        }
    }

    // ==================== Mutations ====================

    pub fn init(&self) -> Result<(), GitError> {
        self.run(&["init"]).map(|_| ())
    }

    /// Stages one path.
    pub fn stage(&self, path: &str) -> Result<(), GitError> {
        self.run(&["add", "--", path]).map(|_| ())
    }

    /// Stages every change in the working directory.
    pub fn stage_all(&self) -> Result<(), GitError> {
        self.run(&["add", "."]).map(|_| ())
    }

    pub fn commit(&self, message: &str) -> Result<(), GitError> {
        self.run(&["commit", "-m", message]).map(|_| ())
    }

    /// Creates a first commit of everything unless history already exists.
    pub fn ensure_initial_commit(&self, message: &str) -> Result<InitialCommit, GitError> {
        if self.has_commits() {
            return Ok(InitialCommit::Existing);
        }

        self.stage_all()?;
        self.commit(message)?;
        Ok(InitialCommit::Created)
    }

    /// Adds `url` as `remote` unless it already appears in `git remote -v`.
    pub fn ensure_remote(&self, remote: &str, url: &str) -> Result<RemoteStatus, GitError> {
        if self.remotes()?.contains(url) {
            return Ok(RemoteStatus::AlreadyPresent);
        }

        self.run(&["remote", "add", remote, url])?;
        Ok(RemoteStatus::Added)
    }

    /// Renames the current branch, forcing over an existing one.
    pub fn rename_branch(&self, branch: &str) -> Result<(), GitError> {
        self.run(&["branch", "-M", branch]).map(|_| ())
    }

    /// Writes `user.name` and `user.email` to the global config.
    pub fn set_global_identity(&self, name: &str, email: &str) -> Result<(), GitError> {
        self.run(&["config", "--global", "user.name", name])?;
        self.run(&["config", "--global", "user.email", email])?;
        Ok(())
    }

    /// Pushes `refspec` to `target` (a remote name or URL).
    ///
    /// Credentials travel in the child's environment as configured by `auth`.
    pub fn push(
        &self,
        target: &str,
        refspec: &str,
        set_upstream: bool,
        credentials: &CredentialPair,
        auth: PushAuth,
    ) -> Result<(), GitError> {
        let mut args = vec!["push"];
        if set_upstream {
            args.push("-u");
        }
        args.push(target);
        args.push(refspec);

        tracing::debug!(%auth, username = %credentials.username, "Pushing to {target}");
        let result = self.output_with_env(&args, &auth.env(credentials));
        Self::check(&args, result).map(|_| ())
    }
}
