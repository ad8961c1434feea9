//! GitHub wire types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An issue as returned by the list endpoint.
///
/// Read-only evidence for the recurrence decision; only the fields the
/// notifier inspects are decoded.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteIssue {
    /// Issue number within the repository.
    pub number: u64,
    /// Issue title, matched exactly against the configured title.
    pub title: String,
    /// When the issue was filed.
    pub created_at: DateTime<Utc>,
}

/// Payload for creating an issue.
#[derive(Debug, Clone, Serialize)]
pub struct NewIssue {
    pub title: String,
    pub body: String,
    pub assignees: Vec<String>,
    pub labels: Vec<String>,
}

/// The tracker's echo of a created issue.
///
/// Both fields are optional at the serde layer so that a malformed body
/// (e.g. `{}`) decodes here and is rejected by the publisher for missing
/// its identifier, rather than failing as a transport error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatedIssue {
    #[serde(default)]
    pub number: Option<u64>,
    #[serde(default)]
    pub html_url: Option<String>,
}
