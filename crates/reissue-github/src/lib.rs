//! GitHub REST client for the reissue notifier.
//!
//! Thin authenticated JSON wrapper over the two endpoints the notifier
//! needs: listing a repository's most recent issues and creating one.
//!
//! ## Interface contract
//!
//! - [`GithubClient::list_issues`] returns a single page of at most 100
//!   issues, newest first, all states. The recurrence evaluator depends on
//!   this ordering: the first title match in the list IS the most recent
//!   matching issue.
//! - Every request carries a bearer token and a descriptive `User-Agent`.
//! - No retries. A transient failure surfaces to the caller; the next
//!   scheduled run retries naturally.

mod client;
mod error;
mod types;

pub use client::{DEFAULT_API_URL, GithubClient, ISSUE_PAGE_SIZE};
pub use error::GithubError;
pub use types::{CreatedIssue, NewIssue, RemoteIssue};
