//! Recurrence decision: has enough time passed since the last matching
//! issue to justify filing a new one?

use chrono::{DateTime, Utc};
use tracing::debug;

use reissue_github::GithubClient;

use crate::{FetchError, FrequencyClass};

/// Whole-day gap between two instants, as an absolute calendar-date
/// difference.
///
/// Date-to-date, not elapsed-seconds floor division: an issue filed late
/// yesterday evening is one day old this morning even though fewer than 24
/// hours have elapsed.
pub fn day_delta(now: DateTime<Utc>, then: DateTime<Utc>) -> i64 {
    (now.date_naive() - then.date_naive()).num_days().abs()
}

/// Decide whether `repo` is due for a new issue titled `title`.
///
/// Scans the first page of the repository's issues (newest first, all
/// states) for an exact, case-sensitive title match; the first hit is the
/// reference issue. No hit means the recurring issue has never been filed,
/// which counts as due.
///
/// Only the first 100 issues are consulted. A repository whose last
/// matching issue has been pushed past the first page by newer issues is
/// treated as never notified and reported due.
pub async fn is_due(
    client: &GithubClient,
    repo: &str,
    title: &str,
    frequency: &FrequencyClass,
) -> Result<bool, FetchError> {
    let issues = client.list_issues(repo).await?;

    let Some(reference) = issues.iter().find(|issue| issue.title == title) else {
        debug!(repo, title, "no prior issue with this title, due by default");
        return Ok(true);
    };

    let days = day_delta(Utc::now(), reference.created_at);
    let due = frequency.is_due_after(days);
    debug!(
        repo,
        number = reference.number,
        days,
        due,
        %frequency,
        "found reference issue"
    );
    Ok(due)
}
