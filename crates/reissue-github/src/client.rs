//! GitHub REST v3 client implementation.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode, header};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{CreatedIssue, GithubError, NewIssue, RemoteIssue};

/// Default GitHub API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Page size for issue listings. A single page only: issues beyond the
/// first 100 are never consulted.
pub const ISSUE_PAGE_SIZE: u32 = 100;

/// Descriptive client identifier sent with every request.
const USER_AGENT: &str = concat!("reissue/", env!("CARGO_PKG_VERSION"));

/// Client for the GitHub issues API.
pub struct GithubClient {
    http: Client,
    api_url: String,
    token: String,
}

impl GithubClient {
    /// Create a new client against `api_url`.
    ///
    /// `timeout` bounds each request end-to-end. An unbounded hang on one
    /// tracker call would stall the entire run, so the bound is explicit
    /// rather than left to the transport default.
    pub fn new(api_url: impl Into<String>, token: impl Into<String>, timeout: Duration) -> Self {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            api_url: api_url.into(),
            token: token.into(),
        }
    }

    /// The API base URL this client talks to.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// List the most recent issues for `repo` (`owner/name` form).
    ///
    /// All states, newest first, one page of at most [`ISSUE_PAGE_SIZE`]
    /// entries.
    pub async fn list_issues(&self, repo: &str) -> Result<Vec<RemoteIssue>, GithubError> {
        let url = format!("{}/repos/{}/issues", self.api_url, repo);
        let page_size = ISSUE_PAGE_SIZE.to_string();

        let response = self
            .http
            .get(&url)
            .query(&[("state", "all"), ("per_page", page_size.as_str())])
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await?;

        let issues: Vec<RemoteIssue> = Self::handle_response(response).await?;
        debug!(repo, count = issues.len(), "listed issues");
        Ok(issues)
    }

    /// Create an issue in `repo`.
    ///
    /// The response body is decoded leniently; callers must check that the
    /// echoed record actually carries an issue number.
    pub async fn create_issue(
        &self,
        repo: &str,
        issue: &NewIssue,
    ) -> Result<CreatedIssue, GithubError> {
        let url = format!("{}/repos/{}/issues", self.api_url, repo);

        let response = self
            .http
            .post(&url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
            .header(header::USER_AGENT, USER_AGENT)
            .json(issue)
            .send()
            .await?;

        let created: CreatedIssue = Self::handle_response(response).await?;
        debug!(repo, number = ?created.number, "created issue");
        Ok(created)
    }

    /// Map a response to its decoded body or a [`GithubError`].
    async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T, GithubError> {
        let status = response.status();

        let rate_limited = status == StatusCode::TOO_MANY_REQUESTS
            || (status == StatusCode::FORBIDDEN
                && response.headers().contains_key(header::RETRY_AFTER));
        if rate_limited {
            let retry_after_secs = response
                .headers()
                .get(header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(GithubError::RateLimited { retry_after_secs });
        }

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();

            // GitHub error bodies carry a human-readable message field
            let message = serde_json::from_str::<ApiError>(&text)
                .map(|e| e.message)
                .unwrap_or(text);

            return Err(GithubError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.json().await?;
        Ok(body)
    }
}

/// GitHub's error response format.
#[derive(Debug, serde::Deserialize)]
struct ApiError {
    message: String,
}
