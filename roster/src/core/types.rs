//! Shared deterministic types for roster parsing and reporting.
//!
//! These types carry no I/O. A `ParsedRoster` is the complete, ordered result
//! of parsing one input document.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One parsed student line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    first_name: String,
    middle_initial: String,
    last_name: String,
    grade: i64,
    has_iep: bool,
}

impl StudentRecord {
    pub fn new(
        first_name: impl Into<String>,
        middle_initial: impl Into<String>,
        last_name: impl Into<String>,
        grade: i64,
        has_iep: bool,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            middle_initial: middle_initial.into(),
            last_name: last_name.into(),
            grade,
            has_iep,
        }
    }

    /// Record with an empty middle initial.
    pub fn without_middle(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        grade: i64,
        has_iep: bool,
    ) -> Self {
        Self::new(first_name, "", last_name, grade, has_iep)
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn middle_initial(&self) -> &str {
        &self.middle_initial
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn grade(&self) -> i64 {
        self.grade
    }

    pub fn has_iep(&self) -> bool {
        self.has_iep
    }
}

/// Renders the report line. An empty middle initial leaves a double space
/// between first and last name; downstream consumers rely on that.
impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} is in grade {}",
            self.first_name, self.middle_initial, self.last_name, self.grade
        )?;
        if self.has_iep {
            f.write_str(" and has an IEP.")
        } else {
            f.write_str(" and does not have an IEP.")
        }
    }
}

/// How a grade token that is not a base-10 integer is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradePolicy {
    /// Reject the whole line.
    Strict,
    /// Substitute grade 0 and keep the line.
    #[default]
    Lenient,
}

/// Why a line did not produce a record.
///
/// `Display` is the operator wording; `run::skip_message` adds line context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("Blank line found")]
    Blank,
    #[error("Invalid input format")]
    InvalidFormat { fields: usize },
    #[error("Invalid grade: {token}")]
    InvalidGrade { token: String },
    #[error("Invalid input format for IEP: {token}")]
    InvalidIep { token: String },
}

/// A discarded input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the input.
    pub line_no: usize,
    /// Trimmed line content.
    pub content: String,
    pub reason: SkipReason,
}

/// Records and discarded lines, both in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRoster {
    pub records: Vec<StudentRecord>,
    pub skipped: Vec<SkippedLine>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_with_middle_initial() {
        let record = StudentRecord::new("Jane", "Q", "Doe", 3, false);
        assert_eq!(
            record.to_string(),
            "Jane Q Doe is in grade 3 and does not have an IEP."
        );
    }

    #[test]
    fn display_without_middle_keeps_double_space() {
        let record = StudentRecord::without_middle("John", "Smith", 5, true);
        assert_eq!(record.middle_initial(), "");
        assert_eq!(record.to_string(), "John  Smith is in grade 5 and has an IEP.");
    }

    #[test]
    fn grade_policy_defaults_to_lenient() {
        assert_eq!(GradePolicy::default(), GradePolicy::Lenient);
    }

    #[test]
    fn skip_reason_messages() {
        assert_eq!(SkipReason::Blank.to_string(), "Blank line found");
        let reason = SkipReason::InvalidFormat { fields: 6 };
        assert_eq!(reason.to_string(), "Invalid input format");
        let reason = SkipReason::InvalidIep {
            token: "x".to_string(),
        };
        assert_eq!(reason.to_string(), "Invalid input format for IEP: x");
    }
}
