//! Seed shapes and the fixed demonstration data.
//!
//! Course rows are planned from three counts; everything else seeded here is
//! a fixed fixture that assumes the backend's test accounts
//! ([`demo_accounts`]) and at least 36 courses already exist.

use anyhow::anyhow;
use chrono::NaiveDate;
use goschool_core::ProvisionError;
use goschool_models::courses::{Level, Shift};
use goschool_models::{CourseId, Family, PersonalData, Subject, UserId, demo_accounts};

/// Seed data for creating a course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseSeed {
    /// 1-based year number.
    pub year: i32,
    /// 1-based division number.
    pub division: i32,
    pub level: Level,
    pub shift: Shift,
}

/// Upper bound on the courses a single run may plan.
pub const MAX_COURSES: usize = 10_000;

/// How many courses to plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseCounts {
    pub years: usize,
    pub divisions: usize,
    /// The first `primary` years are primary, the rest secondary.
    pub primary: usize,
}

impl CourseCounts {
    pub fn new(years: usize, divisions: usize, primary: usize) -> Self {
        Self {
            years,
            divisions,
            primary,
        }
    }

    /// `years × divisions`, or `None` when the product overflows.
    pub fn total(&self) -> Option<usize> {
        self.years.checked_mul(self.divisions)
    }

    /// Checks the counts describe at most [`MAX_COURSES`] courses and
    /// returns how many.
    pub fn validate(&self) -> Result<usize, ProvisionError> {
        match self.total() {
            Some(total) if total <= MAX_COURSES => Ok(total),
            _ => Err(ProvisionError::input(anyhow!(
                "{} years × {} divisions exceeds the limit of {} courses",
                self.years,
                self.divisions,
                MAX_COURSES
            ))),
        }
    }
}

/// The course the demonstration student attends and the subject is taught in.
pub const DEMO_COURSE: CourseId = CourseId::new(34);

/// Courses supervised by the demonstration preceptor.
pub const PRECEPTOR_COURSES: [CourseId; 3] =
    [CourseId::new(34), CourseId::new(35), CourseId::new(36)];

/// Personal data for each demonstration account, in account order.
///
/// # Errors
///
/// Fails with an `Internal` error when a fixture birth date is not a real
/// calendar date, so no account is ever left without its row.
pub fn demo_personal_data() -> Result<Vec<PersonalData>, ProvisionError> {
    let people = [
        (demo_accounts::ADMIN, "Ana Administradora", (1980, 3, 14), "Av. Belgrano 1200", "3815550101"),
        (demo_accounts::STUDENT, "Tomás Estudiante", (2010, 8, 2), "San Martín 455", "3815550102"),
        (demo_accounts::PRECEPTOR, "Paula Preceptora", (1985, 11, 23), "Laprida 78", "3815550103"),
        (demo_accounts::FATHER, "Jorge Padre", (1978, 5, 30), "San Martín 455", "3815550104"),
        (demo_accounts::TEACHER, "Lucía Docente", (1990, 1, 9), "Mendoza 910", "3815550105"),
    ];

    people
        .into_iter()
        .map(|(user_id, full_name, (y, m, d), address, phone_number)| {
            Ok(PersonalData {
                user_id,
                full_name: full_name.to_string(),
                birth_date: birth_date(y, m, d)?,
                address: address.to_string(),
                phone_number: phone_number.to_string(),
            })
        })
        .collect()
}

fn birth_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, ProvisionError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        ProvisionError::internal(anyhow!("invalid fixture birth date {year}-{month:02}-{day:02}"))
    })
}

/// The demonstration student and their parent.
pub fn demo_family() -> Family {
    Family {
        student_id: demo_accounts::STUDENT,
        father_id: demo_accounts::FATHER,
    }
}

/// The subject the demonstration teacher gives in [`DEMO_COURSE`].
pub fn demo_subject() -> Subject {
    Subject {
        name: "Matemática".to_string(),
        course_id: DEMO_COURSE,
        teacher_id: demo_accounts::TEACHER,
    }
}

/// The preceptor placed on [`PRECEPTOR_COURSES`].
pub const DEMO_PRECEPTOR: UserId = demo_accounts::PRECEPTOR;
