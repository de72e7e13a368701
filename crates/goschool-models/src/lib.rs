//! # GoSchool Models
//!
//! Row types written by the provisioning tool.
//!
//! # Modules
//!
//! - [`ids`]: strongly-typed numeric ids
//! - [`courses`]: courses with their level and shift rules
//! - [`users`]: personal data, families, subjects and the demonstration accounts
//!
//! # Example
//!
//! ```ignore
//! use goschool_models::courses::{Level, Shift};
//!
//! let level = Level::for_year_index(4, 6);
//! assert_eq!(Shift::for_course(level, 2), Shift::Morning);
//! ```

pub mod courses;
pub mod ids;
pub mod users;

pub use courses::{Course, Level, Shift};
pub use ids::{CourseId, UserId};
pub use users::{Family, PersonalData, Subject, demo_accounts};
