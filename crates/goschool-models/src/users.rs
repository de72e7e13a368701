//! People-related rows: personal data, family links and subjects.
//!
//! The registration endpoint of the backend creates one account per role, in
//! a fixed order, on an empty `users` table. [`demo_accounts`] names the ids
//! those accounts receive so fixture rows can point at them.

use chrono::NaiveDate;
use sqlx::FromRow;

use crate::ids::{CourseId, UserId};

/// A `personal_data` row.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct PersonalData {
    pub user_id: UserId,
    pub full_name: String,
    pub birth_date: NaiveDate,
    pub address: String,
    pub phone_number: String,
}

/// A `families` row linking a student to a parent account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow)]
pub struct Family {
    pub student_id: UserId,
    pub father_id: UserId,
}

/// A `subjects` row.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Subject {
    pub name: String,
    pub course_id: CourseId,
    pub teacher_id: UserId,
}

/// Accounts created by the backend's test-user registration, in creation order.
pub mod demo_accounts {
    use crate::ids::UserId;

    /// Account emails (also their passwords and roles on the backend).
    pub mod emails {
        pub const ADMIN: &str = "admin";
        pub const STUDENT: &str = "student";
        pub const PRECEPTOR: &str = "preceptor";
        pub const FATHER: &str = "father";
        pub const TEACHER: &str = "teacher";
    }

    pub const ADMIN: UserId = UserId::new(1);
    pub const STUDENT: UserId = UserId::new(2);
    pub const PRECEPTOR: UserId = UserId::new(3);
    pub const FATHER: UserId = UserId::new(4);
    pub const TEACHER: UserId = UserId::new(5);

    /// Every demonstration account id, in creation order.
    pub fn all() -> [UserId; 5] {
        [ADMIN, STUDENT, PRECEPTOR, FATHER, TEACHER]
    }
}
