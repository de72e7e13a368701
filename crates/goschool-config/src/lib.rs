//! # GoSchool Config
//!
//! Configuration types for the provisioning tool, loaded from environment variables:
//!
//! - [`database`]: connection credentials and the per-year database name
//! - [`provision`]: schema file, registration endpoint and key file locations
//!
//! # Example
//!
//! ```ignore
//! use goschool_config::{DatabaseConfig, ProvisionConfig};
//!
//! let database = DatabaseConfig::from_env();
//! let paths = ProvisionConfig::from_env();
//! println!("target database: {}", database.database_name());
//! ```

pub mod database;
pub mod provision;

pub use database::DatabaseConfig;
pub use provision::ProvisionConfig;
