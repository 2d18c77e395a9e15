//! Preprocessor
//!
//!     The [PreProcessor] owns the raw input lines and turns each of them into a classified
//!     [Line], collecting [LineIssue]s for lines that break the fixed-column rules.
//!
//!     A run goes like this:
//!
//!         1. Blank lines are trimmed from the front and back of the input. Interior blank
//!            lines stay. If nothing but blank lines remain the run fails with
//!            [PreprocessError::EmptyInput]; this is the only fatal outcome.
//!         2. Every remaining line is classified in a fixed order:
//!             - sequence number (columns 1-6)
//!             - indicator (column 7)
//!             - code (columns 8-72), skipped for comment lines
//!         3. The finished line is appended to the output.
//!
//!     Rule violations never stop the run. Each one becomes an issue keyed by the physical
//!     line number, and the line is still emitted with whatever could be read from it.
//!
//!     Running [PreProcessor::preprocess] again starts from scratch on the (already trimmed)
//!     input and produces the same lines and issues.

use log::{debug, trace};
use std::collections::BTreeMap;

use super::error::{PreprocessError, PreprocessResult};
use super::issue::{IssueKind, LineIssue};
use super::layout::{self, AREA_A, CODE_AREA, INDICATOR_COL, LINE_NUMBER_AREA};
use super::line::{Indicator, Line};

/// Issues grouped by physical line number. Only lines with issues have an entry.
pub type IssueMap = BTreeMap<usize, Vec<LineIssue>>;

/// Drives line classification over a whole source.
#[derive(Debug, Clone, Default)]
pub struct PreProcessor {
    full_text: Vec<String>,
    lines: Vec<Line>,
    issues: IssueMap,
    line_counter: usize,
}

/// State of a single run. Built fresh on every call and committed when the run is done.
#[derive(Debug, Default)]
struct Run {
    lines: Vec<Line>,
    issues: IssueMap,
    line_counter: usize,
}

impl Run {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            lines: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    fn record(&mut self, issue: LineIssue) {
        debug!("{}", issue);
        self.issues
            .entry(issue.line_number())
            .or_default()
            .push(issue);
    }

    /// Columns 1-6: blank, or an integer kept as written.
    fn read_line_number(&mut self, raw: &str, line: &mut Line) {
        let field = layout::column_slice(raw, LINE_NUMBER_AREA);
        if layout::is_blank(field) {
            return;
        }
        let given = layout::trim_blank(field);
        if given.parse::<i32>().is_ok() {
            line.set_given_line_no(given);
        } else {
            self.record(LineIssue::new(
                line.line_number(),
                LINE_NUMBER_AREA.start,
                IssueKind::InvalidLineNumber,
                None,
            ));
        }
    }

    /// Column 7: blank, comment marker or continuation marker.
    fn read_indicator(&mut self, raw: &str, line: &mut Line) {
        let Some(c) = layout::char_at(raw, INDICATOR_COL) else {
            return;
        };
        let indicator = Indicator::from_char(c);
        if let Indicator::Invalid(_) = indicator {
            self.record(LineIssue::new(
                line.line_number(),
                INDICATOR_COL,
                IssueKind::InvalidIndicator,
                line.given_line_no().map(str::to_string),
            ));
        }
        line.set_indicator(indicator);
    }
}

/// Columns 8-72: record where the code starts and its trimmed text.
fn extract_code(raw: &str, line: &mut Line) {
    if layout::column_count(raw) < AREA_A.start + 1 {
        return;
    }
    let portion = layout::column_slice(raw, CODE_AREA);
    if layout::is_blank(portion) {
        return;
    }
    // Only space separators are skipped; a leading tab is where the code starts.
    let offset = portion
        .chars()
        .position(|c| !layout::is_space_separator(c))
        .unwrap_or(0);
    line.set_code(CODE_AREA.start + offset, layout::trim_blank(portion));
}

/// Drop blank lines at both ends of `lines`, leaving interior blank lines alone.
///
/// All-blank input is emptied before [PreprocessError::EmptyInput] is returned.
pub fn trim_blank_edges(lines: &mut Vec<String>) -> PreprocessResult<()> {
    let Some(first) = lines.iter().position(|line| !layout::is_blank(line)) else {
        // Every line was blank and has been trimmed away.
        lines.clear();
        return Err(PreprocessError::EmptyInput);
    };
    let last = lines
        .iter()
        .rposition(|line| !layout::is_blank(line))
        .ok_or(PreprocessError::EmptyInput)?;
    lines.truncate(last + 1);
    lines.drain(..first);
    Ok(())
}

impl PreProcessor {
    /// Create a preprocessor over already split physical lines.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            full_text: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Create a preprocessor over `source`, split on `\n` or `\r\n`.
    pub fn from_source(source: &str) -> Self {
        Self::new(source.lines())
    }

    /// Classify every line of the input.
    ///
    /// Trims leading and trailing blank lines from the input first. Fails only when the
    /// input holds no non-blank line; all other problems are reported as issues.
    pub fn preprocess(&mut self) -> PreprocessResult<()> {
        self.lines.clear();
        self.issues.clear();
        self.line_counter = 0;

        trim_blank_edges(&mut self.full_text)?;
        debug!("preprocessing {} lines", self.full_text.len());

        let mut run = Run::with_capacity(self.full_text.len());
        for raw in &self.full_text {
            let mut line = Line::new(raw.as_str(), run.line_counter);
            run.read_line_number(raw, &mut line);
            run.read_indicator(raw, &mut line);
            if !line.is_comment() {
                extract_code(raw, &mut line);
            }
            trace!(
                "line {}: indicator={} code_start={:?}",
                line.line_number(),
                line.indicator(),
                line.code_start()
            );
            run.lines.push(line);
            run.line_counter += 1;
        }

        debug!(
            "preprocessed {} lines with {} issues",
            run.line_counter,
            run.issues.values().map(Vec::len).sum::<usize>()
        );
        self.lines = run.lines;
        self.issues = run.issues;
        self.line_counter = run.line_counter;
        Ok(())
    }

    /// The input lines, trimmed once a run has happened.
    pub fn full_text(&self) -> &[String] {
        &self.full_text
    }

    /// Classified lines in input order; index equals physical line number.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn issues(&self) -> &IssueMap {
        &self.issues
    }

    /// Issues recorded for one physical line.
    pub fn issues_for(&self, line_number: usize) -> &[LineIssue] {
        self.issues
            .get(&line_number)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// All issues, ordered by line.
    pub fn all_issues(&self) -> impl Iterator<Item = &LineIssue> {
        self.issues.values().flatten()
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    pub fn issue_count(&self) -> usize {
        self.issues.values().map(Vec::len).sum()
    }

    /// Number of lines processed by the last run.
    pub fn line_count(&self) -> usize {
        self.line_counter
    }

    pub fn line(&self, line_number: usize) -> Option<&Line> {
        self.lines.get(line_number)
    }

    /// Extracted code of a line; `None` if the line does not exist or has no code.
    pub fn code_line(&self, line_number: usize) -> Option<&str> {
        self.line(line_number).and_then(Line::code_line)
    }
}

/// Build a preprocessor over `source` and run it.
pub fn preprocess(source: &str) -> PreprocessResult<PreProcessor> {
    let mut preprocessor = PreProcessor::from_source(source);
    preprocessor.preprocess()?;
    Ok(preprocessor)
}
