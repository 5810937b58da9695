//! GitHub REST API access.
//!
//! Only repository creation is needed: the rest of the workflow goes
//! through the git binary.
//!
//! # Submodules
//!
//! - `client` - blocking HTTP client and API types

pub mod client;

pub use client::{CreatedRepository, GitHubClient};

/// Default GitHub API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Message reported when the API gives no reason for a failure.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Errors from GitHub API calls.
#[derive(Debug, thiserror::Error)]
pub enum GitHubError {
    /// The request never produced a response.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// GitHub answered with a non-success status.
    #[error("{message}")]
    ApiError { status: u16, message: String },

    /// A success response whose body could not be understood.
    #[error("Unexpected response from GitHub: {0}")]
    DecodeError(String),
}
