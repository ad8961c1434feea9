//! Core logic for the reissue notifier.
//!
//! This crate decides, per configured project, whether a recurring issue is
//! due again, and files a new one when it is:
//! - **Configuration**: typed [`Project`] records loaded from an explicit
//!   environment snapshot
//! - **Recurrence**: whole-day gap decision against the last matching issue
//! - **Publishing**: issue payload assembly and the single create call
//! - **Orchestration**: the sequential run loop with per-project failure
//!   isolation and pacing between creates

pub mod config;
mod error;
mod orchestrator;
pub mod publish;
pub mod recurrence;
mod types;

pub use error::{ConfigError, FetchError, PublishError};
pub use orchestrator::{DEFAULT_PACING, Orchestrator};
pub use types::{
    DEFAULT_LABEL, FrequencyClass, IssueTemplate, Outcome, Project, ProjectOutcome, RunReport,
};
