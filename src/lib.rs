//! Pusher - an interactive helper for everyday git and GitHub chores
//!
//! Stages, commits and pushes through the system `git` binary, creates
//! repositories through the GitHub API, and keeps the GitHub username and
//! token in the OS keychain.

pub mod cli;
pub mod config;
pub mod credentials;
pub mod git;
pub mod github;
pub mod workdir;
