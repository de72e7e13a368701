//! Course seeding functionality.

use std::time::Instant;

use anyhow::anyhow;
use goschool_core::ProvisionError;
use goschool_db::ProvisionSession;
use goschool_models::courses::{Level, Shift};
use sqlx::MySqlConnection;
use tracing::info;

use super::models::{CourseCounts, CourseSeed};

/// Plans every course in (year, division) order.
///
/// # Errors
///
/// Fails with an `Input` error when the counts describe more than
/// [`MAX_COURSES`](super::models::MAX_COURSES) courses.
pub fn generate_courses(counts: CourseCounts) -> Result<Vec<CourseSeed>, ProvisionError> {
    let total = counts.validate()?;
    let mut courses = Vec::with_capacity(total);
    if total == 0 {
        return Ok(courses);
    }

    for year_idx in 0..counts.years {
        let level = Level::for_year_index(year_idx, counts.primary);
        for division_idx in 0..counts.divisions {
            courses.push(CourseSeed {
                year: position(year_idx)?,
                division: position(division_idx)?,
                level,
                shift: Shift::for_course(level, division_idx),
            });
        }
    }

    Ok(courses)
}

/// 1-based position stored for a 0-based index.
fn position(index: usize) -> Result<i32, ProvisionError> {
    index
        .checked_add(1)
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| ProvisionError::input(anyhow!("course position {index} is out of range")))
}

/// Seeds the planned courses and returns how many rows were inserted.
pub async fn seed_courses(
    session: &mut ProvisionSession,
    counts: CourseCounts,
) -> Result<u64, ProvisionError> {
    let start_time = Instant::now();
    let courses = generate_courses(counts)?;
    println!(
        "🏫 Seeding {} courses ({} years × {} divisions, {} primary)...",
        courses.len(),
        counts.years,
        counts.divisions,
        counts.primary
    );

    if courses.is_empty() {
        return Ok(0);
    }

    let conn = session.conn().await?;
    let inserted = insert_courses_batch(conn, &courses).await?;

    info!(courses = inserted, "Inserted courses");
    println!(
        "   ✓ Inserted {} courses in {:?}",
        inserted,
        start_time.elapsed()
    );

    Ok(inserted)
}

/// Inserts courses in batches
pub async fn insert_courses_batch(
    conn: &mut MySqlConnection,
    courses: &[CourseSeed],
) -> Result<u64, ProvisionError> {
    // 4 params per course
    const BATCH_SIZE: usize = 500;

    let mut inserted = 0;
    for chunk in courses.chunks(BATCH_SIZE) {
        inserted += insert_courses_chunk(conn, chunk).await?;
    }

    Ok(inserted)
}

async fn insert_courses_chunk(
    conn: &mut MySqlConnection,
    courses: &[CourseSeed],
) -> Result<u64, ProvisionError> {
    if courses.is_empty() {
        return Ok(0);
    }

    let query = courses_insert_sql(courses.len());

    let mut q = sqlx::query(&query);
    for course in courses {
        q = q
            .bind(course.year)
            .bind(course.division.to_string())
            .bind(course.level.as_str())
            .bind(course.shift.as_str());
    }

    let result = q
        .execute(&mut *conn)
        .await
        .map_err(|e| ProvisionError::database(e).context("inserting courses"))?;
    Ok(result.rows_affected())
}

fn courses_insert_sql(rows: usize) -> String {
    let mut query = String::from("INSERT INTO courses (year, division, level, shift) VALUES ");
    for i in 0..rows {
        if i > 0 {
            query.push_str(", ");
        }
        query.push_str("(?, ?, ?, ?)");
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_years_times_divisions() {
        for (years, divisions) in [(0, 3), (3, 0), (1, 1), (12, 3), (5, 7)] {
            let courses = generate_courses(CourseCounts::new(years, divisions, 6)).unwrap();
            assert_eq!(courses.len(), years * divisions);
        }
    }

    #[test]
    fn test_courses_are_in_year_division_order() {
        let courses = generate_courses(CourseCounts::new(2, 3, 1)).unwrap();
        let positions: Vec<(i32, i32)> = courses.iter().map(|c| (c.year, c.division)).collect();
        assert_eq!(
            positions,
            vec![(1, 1), (1, 2), (1, 3), (2, 1), (2, 2), (2, 3)]
        );
    }

    #[test]
    fn test_level_and_shift_follow_position() {
        let courses = generate_courses(CourseCounts::new(12, 3, 6)).unwrap();

        for course in &courses {
            let year_idx = (course.year - 1) as usize;
            let division_idx = (course.division - 1) as usize;
            let secondary = year_idx >= 6;

            assert_eq!(course.level == Level::Secondary, secondary);
            assert_eq!(
                course.shift == Shift::Morning,
                secondary || division_idx == 2
            );
        }
    }

    #[test]
    fn test_primary_third_division_meets_in_the_morning() {
        let courses = generate_courses(CourseCounts::new(1, 4, 1)).unwrap();
        let shifts: Vec<Shift> = courses.iter().map(|c| c.shift).collect();
        assert_eq!(
            shifts,
            vec![Shift::Afternoon, Shift::Afternoon, Shift::Morning, Shift::Afternoon]
        );
    }

    #[test]
    fn test_overflowing_counts_plan_nothing() {
        let err = generate_courses(CourseCounts::new(usize::MAX, 2, 0)).unwrap_err();
        assert_eq!(err.kind, goschool_core::ErrorKind::Input);
    }

    #[test]
    fn test_huge_years_without_divisions_plan_nothing() {
        let courses = generate_courses(CourseCounts::new(usize::MAX, 0, 0)).unwrap();
        assert!(courses.is_empty());
    }

    #[test]
    fn test_position_rejects_values_beyond_i32() {
        assert_eq!(position(0).unwrap(), 1);
        assert!(position(i32::MAX as usize).is_err());
        assert!(position(usize::MAX).is_err());
    }

    #[test]
    fn test_insert_sql_has_one_group_per_row() {
        assert_eq!(
            courses_insert_sql(2),
            "INSERT INTO courses (year, division, level, shift) VALUES (?, ?, ?, ?), (?, ?, ?, ?)"
        );
    }
}
