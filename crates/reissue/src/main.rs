//! reissue: recurring GitHub issue notifier.
//!
//! One-pass job meant to run under an external scheduler (cron, CI): reads
//! project configuration from the environment, checks each project's last
//! matching issue, and files a new one where the configured interval has
//! elapsed. Per-project failures are logged and skipped; only a
//! configuration or auth problem produces a non-zero exit.

use std::time::Duration;

use clap::{Parser, Subcommand};
use miette::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reissue_core::{DEFAULT_LABEL, IssueTemplate, Orchestrator, config};
use reissue_github::{DEFAULT_API_URL, GithubClient};

#[derive(Parser)]
#[command(name = "reissue")]
#[command(about = "Recurring GitHub issue notifier", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one pass over the configured projects
    Run {
        /// GitHub API token
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: String,

        /// Title of the recurring issue; also the key used to find the
        /// previous one
        #[arg(long, env = "ISSUE_TITLE")]
        title: String,

        /// Body of the recurring issue
        #[arg(long, env = "ISSUE_BODY")]
        body: String,

        /// Label applied to created issues
        #[arg(long, env = "ISSUE_LABEL", default_value = DEFAULT_LABEL)]
        label: String,

        /// GitHub API base URL
        #[arg(long, default_value = DEFAULT_API_URL)]
        api_url: String,

        /// Per-request timeout in seconds
        #[arg(long, default_value = "30")]
        timeout_secs: u64,

        /// Delay after each created issue in seconds
        #[arg(long, default_value = "2")]
        pacing_secs: u64,

        /// Evaluate without creating any issues
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "reissue=info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            token,
            title,
            body,
            label,
            api_url,
            timeout_secs,
            pacing_secs,
            dry_run,
        } => {
            run(
                &token,
                &title,
                &body,
                label,
                api_url,
                timeout_secs,
                pacing_secs,
                dry_run,
            )
            .await
        }
    }
}

#[allow(clippy::too_many_arguments)]
async fn run(
    token: &str,
    title: &str,
    body: &str,
    label: String,
    api_url: String,
    timeout_secs: u64,
    pacing_secs: u64,
    dry_run: bool,
) -> Result<()> {
    let token = config::require_token(token).map_err(|e| miette::miette!("{}", e))?;
    let projects =
        config::load_projects(std::env::vars()).map_err(|e| miette::miette!("{}", e))?;

    if projects.is_empty() {
        tracing::warn!("no PROJECT_* entries configured, nothing to do");
        return Ok(());
    }

    let template = IssueTemplate {
        title: config::trim_value(title).to_string(),
        body: config::trim_value(body).to_string(),
        label,
    };

    let client = GithubClient::new(api_url, token, Duration::from_secs(timeout_secs));
    let orchestrator = Orchestrator::new(client, template)
        .with_pacing(Duration::from_secs(pacing_secs))
        .dry_run(dry_run);

    orchestrator.run(&projects).await;
    Ok(())
}
