//! # GoSchool DB
//!
//! Database access for the provisioning tool, using SQLx with MySQL.
//!
//! - [`session`]: the [`ProvisionSession`] that owns the single connection of a run
//! - [`script`]: a small tokenizer that splits SQL scripts into statements
//! - [`schema`]: loading a schema script and dropping every table
//!
//! # Example
//!
//! ```ignore
//! use goschool_config::DatabaseConfig;
//! use goschool_db::{ProvisionSession, schema};
//!
//! let mut session = ProvisionSession::connect(&DatabaseConfig::from_env()).await?;
//! let report = schema::load_schema_file(&mut session, "database.sql").await?;
//! session.finish().await?;
//! ```

pub mod schema;
pub mod script;
pub mod session;

pub use schema::{FailedStatement, SchemaReport};
pub use script::{Statement, split_statements};
pub use session::ProvisionSession;

// Re-export the pool type for callers that build sessions themselves
pub use sqlx::MySqlPool;
