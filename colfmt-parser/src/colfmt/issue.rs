//! Line issues
//!
//! Non-fatal diagnostics raised while classifying lines. An issue always names the physical
//! line and the column where the offending content starts, so a renderer can point at it.

use serde::Serialize;
use std::fmt;

/// The fixed-column rule a line violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    /// Columns 1-6 hold something other than blanks or an integer.
    InvalidLineNumber,
    /// The indicator column holds something other than blank, `*` or `-`.
    InvalidIndicator,
}

impl IssueKind {
    pub fn message(&self) -> &'static str {
        match self {
            IssueKind::InvalidLineNumber => "Invalid line number - must be a parseable integer",
            IssueKind::InvalidIndicator => {
                "Invalid line status character - must be either empty, '*' or '-'"
            }
        }
    }
}

/// A diagnostic tied to one physical line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineIssue {
    line_number: usize,
    column: usize,
    kind: IssueKind,
    message: String,
    associated_line_no: Option<String>,
}

impl LineIssue {
    pub fn new(
        line_number: usize,
        column: usize,
        kind: IssueKind,
        associated_line_no: Option<String>,
    ) -> Self {
        Self {
            line_number,
            column,
            kind,
            message: kind.message().to_string(),
            associated_line_no,
        }
    }

    /// Physical line the issue belongs to (zero-based).
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Column where the offending content starts (zero-based).
    pub fn column(&self) -> usize {
        self.column
    }

    pub fn kind(&self) -> IssueKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Sequence number already resolved for the line, for cross-referencing in reports.
    pub fn associated_line_no(&self) -> Option<&str> {
        self.associated_line_no.as_deref()
    }
}

impl fmt::Display for LineIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}, column {}: {}",
            self.line_number + 1,
            self.column + 1,
            self.message
        )?;
        if let Some(given) = &self.associated_line_no {
            write!(f, " (line number {})", given)?;
        }
        Ok(())
    }
}
