//! One pass over the configured projects.

use std::time::Duration;

use tokio::time::sleep;
use tracing::{info, warn};

use reissue_github::GithubClient;

use crate::{IssueTemplate, Outcome, Project, RunReport, publish, recurrence};

/// Pause after each created issue. Courtesy pacing against the API; calls
/// are strictly sequential either way.
pub const DEFAULT_PACING: Duration = Duration::from_secs(2);

/// Drives evaluate-then-publish for each project in configuration order.
///
/// Per-project failures are logged and recorded in the [`RunReport`]; they
/// never abort the run. Only configuration loading, which happens before an
/// orchestrator exists, is allowed to fail the whole process.
pub struct Orchestrator {
    client: GithubClient,
    template: IssueTemplate,
    pacing: Duration,
    dry_run: bool,
}

impl Orchestrator {
    /// Create an orchestrator with the default pacing delay.
    pub fn new(client: GithubClient, template: IssueTemplate) -> Self {
        Self {
            client,
            template,
            pacing: DEFAULT_PACING,
            dry_run: false,
        }
    }

    /// Override the post-publish pacing delay.
    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    /// Evaluate only; log what would happen without creating issues.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Process every project once.
    #[tracing::instrument(skip(self, projects), fields(count = projects.len()))]
    pub async fn run(&self, projects: &[Project]) -> RunReport {
        let mut report = RunReport::default();

        for project in projects {
            let due = match recurrence::is_due(
                &self.client,
                &project.repo,
                &self.template.title,
                &project.frequency,
            )
            .await
            {
                Ok(due) => due,
                Err(e) => {
                    warn!(
                        project = %project.name,
                        repo = %project.repo,
                        error = %e,
                        "failed to check last issue"
                    );
                    report.record(&project.name, Outcome::FetchFailed(e.to_string()));
                    continue;
                }
            };

            if !due {
                info!("skipping {}, not yet due", project.name);
                report.record(&project.name, Outcome::Skipped);
                continue;
            }

            info!("creating issue for {}", project.name);

            if self.dry_run {
                report.record(&project.name, Outcome::WouldCreate);
                continue;
            }

            match publish::publish(&self.client, project, &self.template).await {
                Ok(number) => {
                    report.record(&project.name, Outcome::Created { number });
                    sleep(self.pacing).await;
                }
                Err(e) => {
                    warn!(
                        project = %project.name,
                        repo = %project.repo,
                        error = %e,
                        "failed to create issue"
                    );
                    report.record(&project.name, Outcome::PublishFailed(e.to_string()));
                }
            }
        }

        info!(
            created = report.created(),
            skipped = report.skipped(),
            failed = report.failed(),
            "run complete"
        );

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FrequencyClass;
    use chrono::Utc;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn project(name: &str, repo: &str, frequency: FrequencyClass) -> Project {
        Project {
            name: name.to_string(),
            frequency,
            assignee: "octocat".to_string(),
            repo: repo.to_string(),
            manager: None,
        }
    }

    fn template() -> IssueTemplate {
        IssueTemplate {
            title: "Recurring Maintenance".to_string(),
            body: "Time for upkeep.".to_string(),
            label: "maintenance".to_string(),
        }
    }

    fn orchestrator(server: &MockServer) -> Orchestrator {
        let client = GithubClient::new(server.uri(), "tok", Duration::from_secs(5));
        Orchestrator::new(client, template()).with_pacing(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_due_project_gets_issue_created() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/octo/widgets/issues"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/repos/octo/widgets/issues"))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(serde_json::json!({"number": 9})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let report = orchestrator(&mock_server)
            .run(&[project("WIDGETS", "octo/widgets", FrequencyClass::Daily)])
            .await;

        assert_eq!(report.outcomes.len(), 1);
        assert_eq!(report.outcomes[0].outcome, Outcome::Created { number: 9 });
    }

    #[tokio::test]
    async fn test_not_due_project_is_skipped_without_post() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/octo/widgets/issues"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {
                    "number": 1,
                    "title": "Recurring Maintenance",
                    "created_at": Utc::now().to_rfc3339()
                }
            ])))
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/repos/octo/widgets/issues"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&mock_server)
            .await;

        let report = orchestrator(&mock_server)
            .run(&[project("WIDGETS", "octo/widgets", FrequencyClass::Weekly)])
            .await;

        assert_eq!(report.outcomes[0].outcome, Outcome::Skipped);
    }

    #[tokio::test]
    async fn test_dry_run_never_posts() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/octo/widgets/issues"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/repos/octo/widgets/issues"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&mock_server)
            .await;

        let report = orchestrator(&mock_server)
            .dry_run(true)
            .run(&[project("WIDGETS", "octo/widgets", FrequencyClass::Daily)])
            .await;

        assert_eq!(report.outcomes[0].outcome, Outcome::WouldCreate);
        assert_eq!(report.created(), 1);
    }

    #[tokio::test]
    async fn test_publish_failure_recorded_and_run_continues() {
        let mock_server = MockServer::start().await;

        // Both projects are due (no prior issues).
        for repo in ["octo/broken", "octo/healthy"] {
            Mock::given(method("GET"))
                .and(path(format!("/repos/{}/issues", repo)))
                .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
                .mount(&mock_server)
                .await;
        }

        // First create echoes `{}` (no identifier); second succeeds.
        Mock::given(method("POST"))
            .and(path("/repos/octo/broken/issues"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({})))
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/repos/octo/healthy/issues"))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(serde_json::json!({"number": 3})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let report = orchestrator(&mock_server)
            .run(&[
                project("BROKEN", "octo/broken", FrequencyClass::Daily),
                project("HEALTHY", "octo/healthy", FrequencyClass::Daily),
            ])
            .await;

        assert!(matches!(
            report.outcomes[0].outcome,
            Outcome::PublishFailed(_)
        ));
        assert_eq!(report.outcomes[1].outcome, Outcome::Created { number: 3 });
        assert_eq!(report.failed(), 1);
        assert_eq!(report.created(), 1);
    }

    #[tokio::test]
    async fn test_fetch_failure_isolated_to_one_project() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/octo/down/issues"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/repos/octo/up/issues"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        Mock::given(method("POST"))
            .and(path("/repos/octo/up/issues"))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(serde_json::json!({"number": 12})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let report = orchestrator(&mock_server)
            .run(&[
                project("DOWN", "octo/down", FrequencyClass::Daily),
                project("UP", "octo/up", FrequencyClass::Daily),
            ])
            .await;

        assert!(matches!(report.outcomes[0].outcome, Outcome::FetchFailed(_)));
        assert_eq!(report.outcomes[1].outcome, Outcome::Created { number: 12 });
    }
}
