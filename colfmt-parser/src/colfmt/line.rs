//! Classified physical line
//!
//!     A [Line] is the record produced for one physical line of the trimmed input. It holds the
//!     original text untouched together with what the preprocessor found in the fixed columns:
//!     the given sequence number, the indicator and the extracted code.
//!
//!     Lines are built by the preprocessor step by step (sequence number, indicator, code) and
//!     are read-only once a run has finished.

use serde::Serialize;
use std::fmt;

use super::layout::{self, AREA_A, COMMENT_MARKER, CONTINUATION_MARKER, IDENTIFICATION_AREA};

/// What the indicator column of a line holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "char", rename_all = "kebab-case")]
pub enum Indicator {
    /// The line ends before the indicator column.
    Absent,
    /// Whitespace: an ordinary code line.
    Blank,
    /// Comment marker; the rest of the line is not code.
    Comment,
    /// Continuation marker.
    Continuation,
    /// Any other character. Reported as an issue, no flag is set.
    Invalid(char),
}

impl Indicator {
    /// Classify the character found in the indicator column.
    pub fn from_char(c: char) -> Self {
        match c {
            COMMENT_MARKER => Indicator::Comment,
            CONTINUATION_MARKER => Indicator::Continuation,
            c if layout::is_blank_char(c) => Indicator::Blank,
            c => Indicator::Invalid(c),
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Indicator::Absent => write!(f, "absent"),
            Indicator::Blank => write!(f, "blank"),
            Indicator::Comment => write!(f, "comment"),
            Indicator::Continuation => write!(f, "continuation"),
            Indicator::Invalid(c) => write!(f, "invalid({:?})", c),
        }
    }
}

/// Code extracted from areas A and B.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeText {
    /// Column of the first code character, counted from the start of the raw line.
    pub start: usize,
    /// The code area with surrounding whitespace removed.
    pub text: String,
}

/// One physical line after classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    line_number: usize,
    raw_text: String,
    given_line_no: Option<String>,
    indicator: Indicator,
    code: Option<CodeText>,
}

impl Line {
    /// Start a new, unclassified record for physical line `line_number`.
    pub fn new(raw_text: impl Into<String>, line_number: usize) -> Self {
        Self {
            line_number,
            raw_text: raw_text.into(),
            given_line_no: None,
            indicator: Indicator::Absent,
            code: None,
        }
    }

    /// Zero-based index of this line in the trimmed input.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Sequence number written in columns 1-6, kept verbatim (leading zeros included).
    pub fn given_line_no(&self) -> Option<&str> {
        self.given_line_no.as_deref()
    }

    pub fn indicator(&self) -> Indicator {
        self.indicator
    }

    pub fn is_comment(&self) -> bool {
        self.indicator == Indicator::Comment
    }

    pub fn is_continuation(&self) -> bool {
        self.indicator == Indicator::Continuation
    }

    pub fn code(&self) -> Option<&CodeText> {
        self.code.as_ref()
    }

    /// Column of the first code character, if any code was found.
    pub fn code_start(&self) -> Option<usize> {
        self.code.as_ref().map(|code| code.start)
    }

    /// Trimmed code text, if any code was found.
    pub fn code_line(&self) -> Option<&str> {
        self.code.as_ref().map(|code| code.text.as_str())
    }

    /// True when the code begins inside area A.
    ///
    /// Division, section and paragraph headers start in area A; statements start in area B.
    pub fn starts_in_area_a(&self) -> bool {
        self.code_start().is_some_and(|start| AREA_A.contains(&start))
    }

    /// Non-blank content of the identification area (columns 73-80), trimmed.
    pub fn identification(&self) -> Option<&str> {
        let ident = layout::column_slice(&self.raw_text, IDENTIFICATION_AREA).trim();
        (!ident.is_empty()).then_some(ident)
    }

    /// True for lines that are empty or contain only whitespace.
    pub fn is_blank(&self) -> bool {
        layout::is_blank(&self.raw_text)
    }

    pub(crate) fn set_given_line_no(&mut self, given: impl Into<String>) {
        self.given_line_no = Some(given.into());
    }

    pub(crate) fn set_indicator(&mut self, indicator: Indicator) {
        self.indicator = indicator;
    }

    pub(crate) fn set_code(&mut self, start: usize, text: impl Into<String>) {
        self.code = Some(CodeText {
            start,
            text: text.into(),
        });
    }
}
