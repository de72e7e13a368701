//! # GoSchool CLI
//!
//! Provisioning steps for the GoSchool database and the dispatcher that
//! strings them into commands.
//!
//! This library crate provides everything the `goschool-cli` binary runs.
//!
//! ## Usage
//!
//! ```ignore
//! use goschool_cli::commands::{Command, StepContext, run_command};
//! use goschool_cli::seeder::CourseCounts;
//!
//! let ctx = StepContext::new(ProvisionConfig::from_env(), Some(CourseCounts::new(12, 3, 6)))?;
//! let reports = run_command(Command::CreateAll, &ctx, Some(&mut session)).await?;
//! ```

pub mod commands;
pub mod seeder;
