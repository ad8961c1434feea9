//! Configuration loading.
//!
//! Projects are declared as `PROJECT_<NAME>` environment variables whose
//! value is `frequency|assignee|owner/repo[|manager]`. Loading works on an
//! explicit snapshot of environment pairs so the core never reads ambient
//! global state; the binary hands in `std::env::vars()`.

use crate::{ConfigError, FrequencyClass, Project};

/// Environment variable prefix marking a project entry.
pub const PROJECT_PREFIX: &str = "PROJECT_";

/// Characters stripped from configured values: whitespace, NUL, and quotes
/// that sneak in from CI secret definitions.
const TRIM_CHARS: &[char] = &[' ', '\n', '\r', '\t', '\u{000b}', '\0', '"'];

/// Strip the trim set from both ends of a configured value.
pub fn trim_value(s: &str) -> &str {
    s.trim_matches(TRIM_CHARS)
}

/// Validate and trim the API token.
pub fn require_token(raw: &str) -> Result<String, ConfigError> {
    let token = trim_value(raw);
    if token.is_empty() {
        return Err(ConfigError::MissingToken);
    }
    Ok(token.to_string())
}

/// Collect every `PROJECT_*` entry from an environment snapshot.
///
/// A malformed entry is fatal: the run aborts before any project is
/// processed. Results are sorted by project name so a run always processes
/// projects in a deterministic configuration order.
pub fn load_projects(
    vars: impl IntoIterator<Item = (String, String)>,
) -> Result<Vec<Project>, ConfigError> {
    let mut projects = Vec::new();
    for (key, value) in vars {
        if let Some(name) = key.strip_prefix(PROJECT_PREFIX) {
            projects.push(parse_project(name.trim(), &value)?);
        }
    }
    projects.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(projects)
}

/// Parse one `PROJECT_*` value into a [`Project`].
fn parse_project(name: &str, value: &str) -> Result<Project, ConfigError> {
    let parts: Vec<&str> = value.split('|').collect();
    if parts.len() < 3 {
        return Err(ConfigError::MalformedProject {
            name: name.to_string(),
            reason: format!(
                "expected frequency|assignee|repo, got {} field(s)",
                parts.len()
            ),
        });
    }

    let frequency = FrequencyClass::parse(trim_value(parts[0]));
    let assignee = parts[1].trim();
    let repo = trim_value(parts[2]);
    let manager = parts.get(3).map(|m| m.trim()).filter(|m| !m.is_empty());

    if assignee.is_empty() {
        return Err(ConfigError::MalformedProject {
            name: name.to_string(),
            reason: "empty assignee".to_string(),
        });
    }
    if repo.is_empty() {
        return Err(ConfigError::MalformedProject {
            name: name.to_string(),
            reason: "empty repository".to_string(),
        });
    }

    Ok(Project {
        name: name.to_string(),
        frequency,
        assignee: assignee.to_string(),
        repo: repo.to_string(),
        manager: manager.map(String::from),
    })
}
