//! Database connection configuration.
//!
//! The school keeps one database per academic year. The database name is
//! always `<school-name>_<current-year>` and the year is read from the local
//! clock every time the name is resolved; only the school prefix and the
//! credentials are configurable.
//!
//! # Configuration
//!
//! - `DB_HOST`: server host (default: `localhost`)
//! - `DB_PORT`: server port (default: `3306`)
//! - `DB_USER`: user name (default: `root`)
//! - `DB_PASSWORD`: password (default: empty)
//! - `SCHOOL_NAME`: database name prefix (default: `colegio_stella_maris`)

use chrono::{Datelike, Local};

pub const DEFAULT_SCHOOL_NAME: &str = "colegio_stella_maris";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub school_name: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3306,
            user: "root".to_string(),
            password: String::new(),
            school_name: DEFAULT_SCHOOL_NAME.to_string(),
        }
    }
}

impl DatabaseConfig {
    /// Creates a new `DatabaseConfig` from environment variables.
    ///
    /// Unset or unparsable variables fall back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            host: lookup("DB_HOST").unwrap_or(defaults.host),
            port: lookup("DB_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            user: lookup("DB_USER").unwrap_or(defaults.user),
            password: lookup("DB_PASSWORD").unwrap_or(defaults.password),
            school_name: lookup("SCHOOL_NAME")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.school_name),
        }
    }

    /// Name of this year's database, e.g. `colegio_stella_maris_2026`.
    pub fn database_name(&self) -> String {
        self.database_name_for(Local::now().year())
    }

    pub fn database_name_for(&self, year: i32) -> String {
        format!("{}_{}", self.school_name, year)
    }
}
