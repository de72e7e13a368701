//! Seeders for the tables the backend expects populated.
//!
//! - [`courses`]: every (year, division) course with its level and shift
//! - [`users`]: test-account registration plus their demonstration rows
//! - [`preceptors`]: preceptor placement on the demonstration courses

pub mod courses;
pub mod models;
pub mod preceptors;
pub mod users;

pub use courses::{generate_courses, seed_courses};
pub use models::{CourseCounts, CourseSeed};
pub use preceptors::assign_preceptors;
pub use users::{Registration, bootstrap_users, register_testing_users};
