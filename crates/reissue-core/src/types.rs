//! Notifier types.

use std::fmt;

/// Label applied to created issues when `ISSUE_LABEL` is not configured.
pub const DEFAULT_LABEL: &str = "maintenance";

/// A project to notify, parsed from one `PROJECT_<NAME>` environment entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Name taken from the environment variable suffix.
    pub name: String,
    /// How often the recurring issue should be filed.
    pub frequency: FrequencyClass,
    /// GitHub login the new issue is assigned to.
    pub assignee: String,
    /// Repository path in `owner/name` form. Together with the run-wide
    /// issue title this identifies the project's "last" issue.
    pub repo: String,
    /// Optional manager handle cc'd in the issue body.
    pub manager: Option<String>,
}

/// Named recurrence interval governing the minimum day gap before
/// re-notifying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrequencyClass {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    /// Any other label. Never due: a typo in the configuration must not
    /// spam a repository with issues.
    Unrecognized(String),
}

impl FrequencyClass {
    /// Parse a frequency label. Matching is exact and case-sensitive.
    pub fn parse(s: &str) -> Self {
        match s {
            "Daily" => Self::Daily,
            "Weekly" => Self::Weekly,
            "Monthly" => Self::Monthly,
            "Quarterly" => Self::Quarterly,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// Minimum whole-day gap before a new issue is due, or `None` for
    /// unrecognized labels.
    pub fn threshold_days(&self) -> Option<i64> {
        match self {
            Self::Daily => Some(1),
            Self::Weekly => Some(7),
            Self::Monthly => Some(30),
            Self::Quarterly => Some(90),
            Self::Unrecognized(_) => None,
        }
    }

    /// Whether a gap of `days` whole days since the reference issue means a
    /// new one is due. Boundary equality counts as due.
    pub fn is_due_after(&self, days: i64) -> bool {
        match self.threshold_days() {
            Some(threshold) => days >= threshold,
            None => false,
        }
    }
}

impl fmt::Display for FrequencyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "Daily"),
            Self::Weekly => write!(f, "Weekly"),
            Self::Monthly => write!(f, "Monthly"),
            Self::Quarterly => write!(f, "Quarterly"),
            Self::Unrecognized(other) => write!(f, "Unrecognized({})", other),
        }
    }
}

/// Run-wide issue content.
#[derive(Debug, Clone)]
pub struct IssueTemplate {
    pub title: String,
    pub body: String,
    pub label: String,
}

/// What happened to a single project during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// An issue was created.
    Created { number: u64 },
    /// Not enough days have elapsed since the reference issue.
    Skipped,
    /// Due, but dry-run mode suppressed the create call.
    WouldCreate,
    /// The issue listing could not be fetched.
    FetchFailed(String),
    /// The create call failed or returned an unusable record.
    PublishFailed(String),
}

/// One project's result within a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOutcome {
    pub project: String,
    pub outcome: Outcome,
}

/// Per-project outcomes for one pass, in configuration order.
#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<ProjectOutcome>,
}

impl RunReport {
    /// Append an outcome for `project`.
    pub fn record(&mut self, project: &str, outcome: Outcome) {
        self.outcomes.push(ProjectOutcome {
            project: project.to_string(),
            outcome,
        });
    }

    /// Number of issues created (dry-run "would create" included).
    pub fn created(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.outcome, Outcome::Created { .. } | Outcome::WouldCreate))
            .count()
    }

    /// Number of projects skipped as not yet due.
    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.outcome == Outcome::Skipped)
            .count()
    }

    /// Number of projects that failed to fetch or publish.
    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| {
                matches!(
                    o.outcome,
                    Outcome::FetchFailed(_) | Outcome::PublishFailed(_)
                )
            })
            .count()
    }
}
