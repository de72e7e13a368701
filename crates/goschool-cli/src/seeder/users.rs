//! Demonstration user bootstrapping.
//!
//! The accounts themselves are created by the backend (it owns password
//! hashing); this module asks it to do so and, only when it answers
//! `201 Created`, fills in the rows that hang off those accounts.

use std::time::Instant;

use goschool_core::{Outcome, ProvisionError};
use goschool_db::ProvisionSession;
use goschool_models::{Family, PersonalData, Subject, demo_accounts};
use reqwest::StatusCode;
use sqlx::MySqlConnection;
use tracing::{info, warn};

use super::models::{DEMO_COURSE, demo_family, demo_personal_data, demo_subject};

/// Result of asking the backend to register its test accounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    Created,
    /// The backend answered with a status other than 201.
    Rejected(StatusCode),
    /// The request never got an answer.
    Unreachable(String),
}

impl Registration {
    /// Why seeding must not go ahead, or `None` when the accounts exist.
    pub fn skip_reason(&self, url: &str) -> Option<String> {
        match self {
            Registration::Created => None,
            Registration::Rejected(status) => {
                Some(format!("registration at {url} answered {status}, expected 201 Created"))
            }
            Registration::Unreachable(error) => {
                Some(format!("registration at {url} unreachable: {error}"))
            }
        }
    }
}

/// Calls the backend's test-user registration endpoint.
pub async fn register_testing_users(client: &reqwest::Client, url: &str) -> Registration {
    match client.get(url).send().await {
        Ok(response) if response.status() == StatusCode::CREATED => Registration::Created,
        Ok(response) => Registration::Rejected(response.status()),
        Err(e) => Registration::Unreachable(e.to_string()),
    }
}

/// Row counts written by [`seed_demo_records`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DemoSeedSummary {
    pub personal_data: u64,
    pub families: u64,
    pub subjects: u64,
    pub course_assignments: u64,
}

/// Registers the test accounts and seeds their demonstration records.
///
/// Returns [`Outcome::Skipped`] without touching the database unless the
/// registration answered exactly `201 Created`.
pub async fn bootstrap_users(
    session: &mut ProvisionSession,
    client: &reqwest::Client,
    url: &str,
) -> Result<Outcome, ProvisionError> {
    let start_time = Instant::now();
    println!("👥 Registering test users at {}...", url);

    let registration = register_testing_users(client, url).await;
    if let Some(reason) = registration.skip_reason(url) {
        warn!(url = %url, "{}", reason);
        return Ok(Outcome::skipped(reason));
    }
    info!(url = %url, "Test users registered");

    let conn = session.conn().await?;
    let summary = seed_demo_records(conn).await?;

    println!(
        "   ✓ Seeded {} personal data rows, {} family, {} subject in {:?}",
        summary.personal_data,
        summary.families,
        summary.subjects,
        start_time.elapsed()
    );

    Ok(Outcome::executed(format!(
        "users registered; {} personal data rows, {} family link, {} subject, {} course assignment",
        summary.personal_data, summary.families, summary.subjects, summary.course_assignments
    )))
}

/// Inserts the fixed demonstration rows for the backend's test accounts.
pub async fn seed_demo_records(
    conn: &mut MySqlConnection,
) -> Result<DemoSeedSummary, ProvisionError> {
    let personal_data = insert_personal_data(conn, &demo_personal_data()?).await?;
    let families = insert_family(conn, demo_family()).await?;
    let subjects = insert_subject(conn, &demo_subject()).await?;

    let course_assignments = sqlx::query("UPDATE users SET course_id = ? WHERE id = ?")
        .bind(DEMO_COURSE)
        .bind(demo_accounts::STUDENT)
        .execute(&mut *conn)
        .await
        .map_err(|e| ProvisionError::database(e).context("assigning the demo student's course"))?
        .rows_affected();

    Ok(DemoSeedSummary {
        personal_data,
        families,
        subjects,
        course_assignments,
    })
}

async fn insert_personal_data(
    conn: &mut MySqlConnection,
    rows: &[PersonalData],
) -> Result<u64, ProvisionError> {
    if rows.is_empty() {
        return Ok(0);
    }

    let mut query = String::from(
        "INSERT INTO personal_data (user_id, full_name, birth_date, address, phone_number) VALUES ",
    );
    for i in 0..rows.len() {
        if i > 0 {
            query.push_str(", ");
        }
        query.push_str("(?, ?, ?, ?, ?)");
    }

    let mut q = sqlx::query(&query);
    for row in rows {
        q = q
            .bind(row.user_id)
            .bind(&row.full_name)
            .bind(row.birth_date)
            .bind(&row.address)
            .bind(&row.phone_number);
    }

    let result = q
        .execute(&mut *conn)
        .await
        .map_err(|e| ProvisionError::database(e).context("inserting personal data"))?;
    Ok(result.rows_affected())
}

async fn insert_family(conn: &mut MySqlConnection, family: Family) -> Result<u64, ProvisionError> {
    let result = sqlx::query("INSERT INTO families (student_id, father_id) VALUES (?, ?)")
        .bind(family.student_id)
        .bind(family.father_id)
        .execute(&mut *conn)
        .await
        .map_err(|e| ProvisionError::database(e).context("inserting family link"))?;
    Ok(result.rows_affected())
}

async fn insert_subject(conn: &mut MySqlConnection, subject: &Subject) -> Result<u64, ProvisionError> {
    let result = sqlx::query("INSERT INTO subjects (name, course_id, teacher_id) VALUES (?, ?, ?)")
        .bind(&subject.name)
        .bind(subject.course_id)
        .bind(subject.teacher_id)
        .execute(&mut *conn)
        .await
        .map_err(|e| ProvisionError::database(e).context("inserting subject"))?;
    Ok(result.rows_affected())
}
