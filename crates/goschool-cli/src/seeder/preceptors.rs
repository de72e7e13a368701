//! Preceptor assignment.

use goschool_core::ProvisionError;
use goschool_db::ProvisionSession;
use goschool_models::{CourseId, UserId};
use tracing::{info, warn};

use super::models::{DEMO_PRECEPTOR, PRECEPTOR_COURSES};

/// Places the demonstration preceptor on its courses.
///
/// The updates are unconditional: a course id that does not exist simply
/// matches no row. Returns the number of rows changed.
pub async fn assign_preceptors(session: &mut ProvisionSession) -> Result<u64, ProvisionError> {
    assign_preceptor(session, DEMO_PRECEPTOR, &PRECEPTOR_COURSES).await
}

pub async fn assign_preceptor(
    session: &mut ProvisionSession,
    preceptor: UserId,
    courses: &[CourseId],
) -> Result<u64, ProvisionError> {
    let conn = session.conn().await?;
    let mut affected = 0;

    for &course in courses {
        let result = sqlx::query("UPDATE courses SET preceptor_id = ? WHERE id = ?")
            .bind(preceptor)
            .bind(course)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                ProvisionError::database(e)
                    .context(format!("assigning preceptor {preceptor} to course {course}"))
            })?;

        if result.rows_affected() == 0 {
            warn!(course = %course, "No course row updated");
        }
        affected += result.rows_affected();
    }

    info!(preceptor = %preceptor, rows = affected, "Assigned preceptor");
    Ok(affected)
}
