//! Error kinds for the notifier core.
//!
//! The orchestrator matches on these kinds to decide continue-vs-abort:
//! [`ConfigError`] is fatal before any project runs; [`FetchError`] and
//! [`PublishError`] are caught per project, logged, and skipped.

use thiserror::Error;

use reissue_github::GithubError;

/// Configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The API token is missing or empty after trimming.
    #[error("GITHUB_TOKEN is missing or empty")]
    MissingToken,

    /// A `PROJECT_*` entry does not have the expected shape.
    #[error("malformed project entry PROJECT_{name}: {reason}")]
    MalformedProject { name: String, reason: String },
}

/// The issue listing for a repository could not be retrieved.
#[derive(Debug, Error)]
pub enum FetchError {
    /// GitHub API error.
    #[error("failed to fetch issues: {0}")]
    Github(#[from] GithubError),
}

/// The tracker did not return a usable created-issue record.
#[derive(Debug, Error)]
pub enum PublishError {
    /// GitHub API error.
    #[error("failed to create issue: {0}")]
    Github(#[from] GithubError),

    /// The response decoded but carried no issue number.
    #[error("create response for {repo} did not contain an issue number")]
    MissingNumber { repo: String },
}
