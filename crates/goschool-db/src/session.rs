//! The provisioning session.
//!
//! A run uses exactly one database connection. The session owns a pool capped
//! at one connection and a transaction that is begun on first use, so steps
//! that never touch the database (a skipped bootstrap, a comment-only script)
//! never connect. [`ProvisionSession::finish`] commits once and closes the
//! pool it opened; dropping the session without finishing rolls the
//! transaction back.
//!
//! MySQL commits DDL statements implicitly, so `CREATE TABLE` and
//! `DROP TABLE` take effect immediately regardless of the final commit.

use std::time::Duration;

use goschool_config::DatabaseConfig;
use goschool_core::ProvisionError;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::{MySql, MySqlConnection, MySqlPool, Transaction};
use tracing::{debug, info};

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

pub struct ProvisionSession {
    pool: MySqlPool,
    tx: Option<Transaction<'static, MySql>>,
    database: String,
    owns_pool: bool,
}

impl ProvisionSession {
    /// Opens a session against this year's database.
    ///
    /// # Errors
    ///
    /// Returns a [`ProvisionError`] of kind `Database` when the server cannot
    /// be reached or rejects the credentials.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, ProvisionError> {
        let database = config.database_name();
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&database);

        let pool = MySqlPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_with(options)
            .await
            .map_err(|e| {
                ProvisionError::database(e).context(format!(
                    "connecting to `{}` on {}:{}",
                    database, config.host, config.port
                ))
            })?;

        info!(database = %database, host = %config.host, "Opened provisioning session");
        let mut session = Self::from_pool(pool, database);
        session.owns_pool = true;
        Ok(session)
    }

    /// Wraps an existing pool. The pool should hold a single connection so
    /// that session-level settings such as `FOREIGN_KEY_CHECKS` apply to
    /// every statement of the run. [`finish`](Self::finish) leaves a
    /// borrowed pool open.
    pub fn from_pool(pool: MySqlPool, database: impl Into<String>) -> Self {
        Self {
            pool,
            tx: None,
            database: database.into(),
            owns_pool: false,
        }
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    /// Whether any statement has been issued through this session yet.
    pub fn is_active(&self) -> bool {
        self.tx.is_some()
    }

    /// The session's connection, beginning the run's transaction on first use.
    pub async fn conn(&mut self) -> Result<&mut MySqlConnection, ProvisionError> {
        let tx = match self.tx {
            Some(ref mut tx) => tx,
            None => {
                let tx = self.pool.begin().await.map_err(|e| {
                    ProvisionError::database(e).context("beginning provisioning transaction")
                })?;
                debug!(database = %self.database, "Began provisioning transaction");
                self.tx.insert(tx)
            }
        };
        Ok(&mut **tx)
    }

    /// Commits the run's transaction, if one was begun, and closes the pool
    /// when the session opened it.
    pub async fn finish(mut self) -> Result<(), ProvisionError> {
        if let Some(tx) = self.tx.take() {
            tx.commit()
                .await
                .map_err(|e| ProvisionError::database(e).context("committing provisioning run"))?;
            info!(database = %self.database, "Committed provisioning run");
        }
        if self.owns_pool {
            self.pool.close().await;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_session() -> ProvisionSession {
        let pool = MySqlPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_millis(200))
            .connect_lazy("mysql://root@127.0.0.1:1/unreachable")
            .unwrap();
        ProvisionSession::from_pool(pool, "unreachable")
    }

    #[tokio::test]
    async fn test_finish_without_statements_never_connects() {
        let session = unreachable_session();
        assert!(!session.is_active());
        assert_eq!(session.database(), "unreachable");
        assert!(session.finish().await.is_ok());
    }

    #[tokio::test]
    async fn test_conn_reports_database_error() {
        let mut session = unreachable_session();
        let err = session.conn().await.unwrap_err();
        assert_eq!(err.kind, goschool_core::ErrorKind::Database);
        assert!(!session.is_active());
    }
}
