//! Issue payload assembly and creation.

use tracing::debug;

use reissue_github::{GithubClient, NewIssue};

use crate::{IssueTemplate, Project, PublishError};

/// Build the issue payload for `project`.
///
/// The new issue is assigned to the project's assignee, carries the
/// run-wide label, and gains a `//cc @manager` mention at the end of the
/// body when the project has a manager.
pub fn draft_issue(project: &Project, template: &IssueTemplate) -> NewIssue {
    let mut body = template.body.clone();
    if let Some(manager) = &project.manager {
        body.push_str(&format!("\n\n//cc @{}", manager));
    }

    NewIssue {
        title: template.title.clone(),
        body,
        assignees: vec![project.assignee.clone()],
        labels: vec![template.label.clone()],
    }
}

/// Create one issue for `project` and return its number.
///
/// Not idempotent: every successful call files a new issue. The
/// orchestrator's due-check is the only thing preventing duplicates.
pub async fn publish(
    client: &GithubClient,
    project: &Project,
    template: &IssueTemplate,
) -> Result<u64, PublishError> {
    let issue = draft_issue(project, template);
    let created = client.create_issue(&project.repo, &issue).await?;

    let number = created.number.ok_or_else(|| PublishError::MissingNumber {
        repo: project.repo.clone(),
    })?;

    debug!(project = %project.name, repo = %project.repo, number, "issue created");
    Ok(number)
}
