//! Commands and the steps they run.
//!
//! A [`Command`] is an ordered list of [`Step`]s. Steps run one after the
//! other; the first error ends the run, a skipped step does not.

use std::fmt;

use anyhow::anyhow;
use goschool_auth::generate_key_files;
use goschool_config::ProvisionConfig;
use goschool_core::{Outcome, ProvisionError};
use goschool_db::{ProvisionSession, schema};
use tracing::info;

use crate::seeder::{self, CourseCounts};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    GenerateKeys,
    DeleteTables,
    CreateTables,
    CreateCourses,
    CreateUsers,
    CreatePreceptors,
}

impl Step {
    /// Operator-facing name, matching the command that runs the step alone.
    pub fn name(&self) -> &'static str {
        match self {
            Step::GenerateKeys => "generate_rsa",
            Step::DeleteTables => "delete_tables",
            Step::CreateTables => "create_tables",
            Step::CreateCourses => "create_courses",
            Step::CreateUsers => "create_users",
            Step::CreatePreceptors => "create_preceptors",
        }
    }

    pub fn needs_database(&self) -> bool {
        !matches!(self, Step::GenerateKeys)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    CreateCourses,
    DeleteTables,
    CreateTables,
    CreateUsers,
    CreatePreceptors,
    GenerateRsa,
    CreateAll,
}

impl Command {
    pub fn steps(&self) -> &'static [Step] {
        match self {
            Command::CreateCourses => &[Step::CreateCourses],
            Command::DeleteTables => &[Step::DeleteTables],
            Command::CreateTables => &[Step::CreateTables],
            Command::CreateUsers => &[Step::CreateUsers],
            Command::CreatePreceptors => &[Step::CreatePreceptors],
            Command::GenerateRsa => &[Step::GenerateKeys],
            Command::CreateAll => &[
                Step::GenerateKeys,
                Step::CreateTables,
                Step::CreateCourses,
                Step::CreateUsers,
                Step::CreatePreceptors,
            ],
        }
    }

    pub fn needs_database(&self) -> bool {
        self.steps().iter().any(Step::needs_database)
    }

    pub fn needs_course_counts(&self) -> bool {
        self.steps().contains(&Step::CreateCourses)
    }
}

/// Everything a step needs besides the database session.
#[derive(Debug, Clone)]
pub struct StepContext {
    pub config: ProvisionConfig,
    pub client: reqwest::Client,
    pub counts: Option<CourseCounts>,
}

impl StepContext {
    pub fn new(config: ProvisionConfig, counts: Option<CourseCounts>) -> Result<Self, ProvisionError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ProvisionError::network(e).context("building HTTP client"))?;

        Ok(Self {
            config,
            client,
            counts,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub step: Step,
    pub outcome: Outcome,
}

/// Runs every step of `command` in order.
pub async fn run_command(
    command: Command,
    ctx: &StepContext,
    mut session: Option<&mut ProvisionSession>,
) -> Result<Vec<StepReport>, ProvisionError> {
    let mut reports = Vec::with_capacity(command.steps().len());

    for &step in command.steps() {
        info!(step = %step, "Running step");
        let outcome = run_step(step, ctx, session.as_deref_mut())
            .await
            .map_err(|e| e.context(format!("step `{step}` failed")))?;
        reports.push(StepReport { step, outcome });
    }

    Ok(reports)
}

/// Runs a single step.
///
/// # Errors
///
/// Fails with an `Input` error when a database step gets no session or the
/// course step gets no counts.
pub async fn run_step(
    step: Step,
    ctx: &StepContext,
    session: Option<&mut ProvisionSession>,
) -> Result<Outcome, ProvisionError> {
    let config = &ctx.config;

    match step {
        Step::GenerateKeys => {
            generate_key_files(&config.private_key_path, &config.public_key_path)
                .await
                .map_err(ProvisionError::key)?;
            Ok(Outcome::executed(format!(
                "wrote {} and {}",
                config.private_key_path.display(),
                config.public_key_path.display()
            )))
        }
        Step::DeleteTables => {
            let dropped = schema::erase_tables(require_session(step, session)?).await?;
            Ok(Outcome::executed(format!("dropped {} tables", dropped.len())))
        }
        Step::CreateTables => {
            let session = require_session(step, session)?;
            let report = schema::load_schema_file(session, &config.schema_path).await?;
            Ok(Outcome::executed(format!(
                "executed {} of {} statements, {} failed, {} blank fragments skipped",
                report.executed,
                report.attempted(),
                report.failed.len(),
                report.skipped
            )))
        }
        Step::CreateCourses => {
            let counts = ctx
                .counts
                .ok_or_else(|| ProvisionError::input(anyhow!("course counts were not provided")))?;
            let inserted = seeder::seed_courses(require_session(step, session)?, counts).await?;
            Ok(Outcome::executed(format!("inserted {inserted} courses")))
        }
        Step::CreateUsers => {
            let session = require_session(step, session)?;
            seeder::bootstrap_users(session, &ctx.client, &config.registration_url).await
        }
        Step::CreatePreceptors => {
            let updated = seeder::assign_preceptors(require_session(step, session)?).await?;
            Ok(Outcome::executed(format!("updated {updated} courses")))
        }
    }
}

fn require_session(
    step: Step,
    session: Option<&mut ProvisionSession>,
) -> Result<&mut ProvisionSession, ProvisionError> {
    session.ok_or_else(|| ProvisionError::input(anyhow!("`{step}` needs a database session")))
}
