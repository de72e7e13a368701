//! Result of a single provisioning step.
//!
//! Every step either ran and has something to report, or was skipped because
//! a precondition did not hold (for example the registration endpoint did not
//! answer `201 Created`). Skips are not errors: the run continues and the
//! operator is told why.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The step ran; the summary is shown to the operator.
    Executed { summary: String },
    /// The step did nothing because a precondition was not met.
    Skipped { reason: String },
}

impl Outcome {
    pub fn executed(summary: impl Into<String>) -> Self {
        Outcome::Executed {
            summary: summary.into(),
        }
    }

    pub fn skipped(reason: impl Into<String>) -> Self {
        Outcome::Skipped {
            reason: reason.into(),
        }
    }

    pub fn is_executed(&self) -> bool {
        matches!(self, Outcome::Executed { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Outcome::Skipped { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Executed { summary } => write!(f, "done: {summary}"),
            Outcome::Skipped { reason } => write!(f, "skipped: {reason}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_executed() {
        let outcome = Outcome::executed("inserted 3 rows");
        assert!(outcome.is_executed());
        assert!(!outcome.is_skipped());
        assert_eq!(outcome.to_string(), "done: inserted 3 rows");
    }

    #[test]
    fn test_skipped() {
        let outcome = Outcome::skipped("registration returned 500");
        assert!(outcome.is_skipped());
        assert_eq!(outcome.to_string(), "skipped: registration returned 500");
    }
}
