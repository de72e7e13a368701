//! Course rows and the positional rules that classify them.
//!
//! A course is identified by its 1-based `year` and `division`. The level and
//! shift are never chosen per row; they follow from the course's position:
//!
//! - years whose 0-based index is below the primary-level count are primary,
//!   the rest secondary
//! - secondary courses and every course of the third division meet in the
//!   morning, the rest in the afternoon

use std::fmt;

use sqlx::FromRow;

use crate::ids::{CourseId, UserId};

/// 0-based index of the division that always meets in the morning.
pub const MORNING_DIVISION_INDEX: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Primary,
    Secondary,
}

impl Level {
    /// Level of the year at 0-based `year_index` when the first
    /// `primary_levels` years are primary.
    pub fn for_year_index(year_index: usize, primary_levels: usize) -> Self {
        if year_index >= primary_levels {
            Level::Secondary
        } else {
            Level::Primary
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Primary => "primary",
            Level::Secondary => "secondary",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shift {
    Morning,
    Afternoon,
}

impl Shift {
    /// Shift of a course of the given level at 0-based `division_index`.
    pub fn for_course(level: Level, division_index: usize) -> Self {
        if level == Level::Secondary || division_index == MORNING_DIVISION_INDEX {
            Shift::Morning
        } else {
            Shift::Afternoon
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Shift::Morning => "morning",
            Shift::Afternoon => "afternoon",
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `courses` row as stored.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Course {
    pub id: CourseId,
    pub year: i32,
    pub division: String,
    pub level: String,
    pub shift: String,
    pub preceptor_id: Option<UserId>,
}
