//! Schema loading and table erasure.
//!
//! Loading is best effort: each statement of the script runs on its own and a
//! failing statement is logged and recorded, never aborting the rest of the
//! script. Erasure drops every table of the session's database with
//! foreign-key checks disabled for the duration.

use std::path::Path;

use goschool_core::ProvisionError;
use sqlx::MySqlConnection;
use tracing::{error, info, warn};

use crate::script::split_statements;
use crate::session::ProvisionSession;

/// A statement the server rejected while loading a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedStatement {
    pub index: usize,
    pub label: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaReport {
    /// Statements the server accepted.
    pub executed: usize,
    /// Blank or comment-only fragments that were never sent.
    pub skipped: usize,
    pub failed: Vec<FailedStatement>,
}

impl SchemaReport {
    pub fn attempted(&self) -> usize {
        self.executed + self.failed.len()
    }
}

/// Reads `path` and loads it with [`load_schema`].
pub async fn load_schema_file(
    session: &mut ProvisionSession,
    path: impl AsRef<Path>,
) -> Result<SchemaReport, ProvisionError> {
    let path = path.as_ref();
    let script = tokio::fs::read_to_string(path).await.map_err(|e| {
        ProvisionError::io(e).context(format!("reading schema file {}", path.display()))
    })?;

    info!(path = %path.display(), "Loading schema file");
    load_schema(session, &script).await
}

/// Executes every statement of `script` in order.
///
/// # Errors
///
/// Only fails when the session cannot provide a connection. Statement errors
/// are collected in [`SchemaReport::failed`].
pub async fn load_schema(
    session: &mut ProvisionSession,
    script: &str,
) -> Result<SchemaReport, ProvisionError> {
    let split = split_statements(script);
    let mut report = SchemaReport {
        skipped: split.skipped,
        ..Default::default()
    };

    for statement in &split.statements {
        let label = statement.label();
        let conn = session.conn().await?;

        match sqlx::raw_sql(statement.sql()).execute(&mut *conn).await {
            Ok(_) => {
                info!(statement = statement.index, "{}", label);
                report.executed += 1;
            }
            Err(e) => {
                error!(statement = statement.index, error = %e, "{} failed", label);
                report.failed.push(FailedStatement {
                    index: statement.index,
                    label,
                    error: e.to_string(),
                });
            }
        }
    }

    if !report.failed.is_empty() {
        warn!(
            failed = report.failed.len(),
            executed = report.executed,
            "Schema loaded with failing statements"
        );
    }

    Ok(report)
}

/// Drops every table of the session's database.
///
/// Foreign-key checks are switched off first and switched back on afterwards,
/// also when a drop fails. Running it on an empty database drops nothing.
pub async fn erase_tables(session: &mut ProvisionSession) -> Result<Vec<String>, ProvisionError> {
    let conn = session.conn().await?;

    sqlx::raw_sql("SET FOREIGN_KEY_CHECKS = 0")
        .execute(&mut *conn)
        .await
        .map_err(|e| ProvisionError::database(e).context("disabling foreign key checks"))?;

    let dropped = drop_all_tables(conn).await;

    let restored = sqlx::raw_sql("SET FOREIGN_KEY_CHECKS = 1")
        .execute(&mut *conn)
        .await
        .map_err(|e| ProvisionError::database(e).context("re-enabling foreign key checks"));

    let dropped = dropped?;
    restored?;
    Ok(dropped)
}

async fn drop_all_tables(conn: &mut MySqlConnection) -> Result<Vec<String>, ProvisionError> {
    let tables = fetch_table_names(conn).await?;

    for table in &tables {
        info!(table = %table, "Dropping table");
        sqlx::raw_sql(&drop_table_sql(table))
            .execute(&mut *conn)
            .await
            .map_err(|e| ProvisionError::database(e).context(format!("dropping table `{table}`")))?;
    }

    Ok(tables)
}

async fn fetch_table_names(conn: &mut MySqlConnection) -> Result<Vec<String>, ProvisionError> {
    // Depending on the server version SHOW TABLES reports a text or a binary
    // column, so decode raw bytes.
    let names: Vec<Vec<u8>> = sqlx::query_scalar("SHOW TABLES")
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| ProvisionError::database(e).context("listing tables"))?;

    Ok(names
        .into_iter()
        .map(|name| String::from_utf8_lossy(&name).into_owned())
        .collect())
}

fn drop_table_sql(table: &str) -> String {
    format!("DROP TABLE IF EXISTS `{}`", table.replace('`', "``"))
}
