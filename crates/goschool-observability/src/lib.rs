//! GoSchool Observability
//!
//! Console logging for the provisioning tool. Every crate logs through the
//! `tracing` macros; this crate installs the subscriber that prints them.
//!
//! # Examples
//!
//! ```no_run
//! use goschool_observability::init_basic_console_logging;
//!
//! init_basic_console_logging();
//! tracing::info!("provisioning started");
//! ```

pub mod basic_logging;

pub use basic_logging::{default_filter, init_basic_console_logging};
