//! Menu actions.
//!
//! Each submodule implements one menu entry as a `run` function over the
//! shared [`Session`](crate::cli::session::Session).

/// Create a repository on GitHub.
pub mod create_repo;

/// Store the username and token.
pub mod credentials;

/// Stage, commit and push selected files.
pub mod push;

/// Write and commit README.md.
pub mod readme;

/// Repository preconditions used by the push flow.
pub mod repo;

/// Commit all changes and push to the existing remote.
pub mod update;
