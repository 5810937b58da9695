//! HTTP client for the GitHub REST API.

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use super::{GitHubError, UNKNOWN_ERROR};

/// User agent sent with every request; GitHub rejects requests without one.
const USER_AGENT: &str = concat!("pusher/", env!("CARGO_PKG_VERSION"));

/// Authenticated GitHub API client.
pub struct GitHubClient {
    /// HTTP client instance.
    client: Client,
    /// Base URL of the API, without a trailing slash.
    base_url: String,
    /// Personal access token.
    token: String,
}

impl GitHubClient {
    /// Creates a client for the API at `base_url`.
    pub fn with_url(base_url: &str, token: &str) -> Result<Self, GitHubError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    /// Creates a repository owned by the authenticated user.
    ///
    /// GitHub answers `201 Created` on success. Any other status becomes
    /// [`GitHubError::ApiError`] carrying the API's `message`.
    pub fn create_repository(
        &self,
        name: &str,
        private: bool,
    ) -> Result<CreatedRepository, GitHubError> {
        let url = format!("{}/user/repos", self.base_url);
        let payload = CreateRepositoryRequest { name, private };

        tracing::debug!(%url, private, "Creating repository {name}");
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("token {}", self.token))
            .json(&payload)
            .send()?;

        let status = response.status();
        let body = response.text()?;
        parse_create_response(status, &body)
    }
}

/// Maps a create-repository response onto the API result.
fn parse_create_response(status: StatusCode, body: &str) -> Result<CreatedRepository, GitHubError> {
    if status == StatusCode::CREATED {
        return serde_json::from_str(body).map_err(|e| GitHubError::DecodeError(e.to_string()));
    }

    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_ERROR.to_string());

    tracing::warn!(status = status.as_u16(), "Repository creation failed: {message}");
    Err(GitHubError::ApiError {
        status: status.as_u16(),
        message,
    })
}

// ==================== API Types ====================

/// Request body for `POST /user/repos`.
#[derive(Debug, Serialize)]
pub struct CreateRepositoryRequest<'a> {
    pub name: &'a str,
    pub private: bool,
}

/// The fields of a created repository the session uses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedRepository {
    /// Web page of the repository.
    pub html_url: String,

    /// HTTPS clone URL.
    #[serde(default)]
    pub clone_url: Option<String>,
}

/// Error body returned by the API.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_with_url_trims_slash() {
        let client = GitHubClient::with_url("https://ghe.example.com/api/v3/", "t").unwrap();
        assert_eq!(client.base_url, "https://ghe.example.com/api/v3");
    }

    #[test]
    fn test_request_serialize() {
        let json = serde_json::to_string(&CreateRepositoryRequest {
            name: "hello",
            private: true,
        })
        .unwrap();
        assert_eq!(json, r#"{"name":"hello","private":true}"#);
    }

    #[test]
    fn test_parse_created() {
        let body = r#"{
            "id": 1,
            "html_url": "https://github.com/octocat/hello",
            "clone_url": "https://github.com/octocat/hello.git"
        }"#;

        let repo = parse_create_response(StatusCode::CREATED, body).unwrap();
        assert_eq!(repo.html_url, "https://github.com/octocat/hello");
        assert_eq!(
            repo.clone_url.as_deref(),
            Some("https://github.com/octocat/hello.git")
        );
    }

    #[test]
    fn test_parse_created_without_html_url() {
        let err = parse_create_response(StatusCode::CREATED, "{}").unwrap_err();
        assert!(matches!(err, GitHubError::DecodeError(_)));
    }

    #[test]
    fn test_parse_error_message() {
        let err = parse_create_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"message": "name already exists"}"#,
        )
        .unwrap_err();

        match err {
            GitHubError::ApiError { status, message } => {
                assert_eq!(status, 422);
                assert_eq!(message, "name already exists");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_error_without_message() {
        for body in ["", "not json", r#"{"errors": []}"#, r#"{"message": ""}"#] {
            let err = parse_create_response(StatusCode::UNAUTHORIZED, body).unwrap_err();
            assert_eq!(err.to_string(), UNKNOWN_ERROR);
        }
    }

    #[test]
    fn test_ok_is_not_created() {
        let err = parse_create_response(
            StatusCode::OK,
            r#"{"html_url": "https://github.com/octocat/hello"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, GitHubError::ApiError { status: 200, .. }));
    }
}
