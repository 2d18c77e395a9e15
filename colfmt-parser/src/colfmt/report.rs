//! Reports
//!
//!     Two views of a finished run:
//!
//!         - [Report]: a serializable snapshot (lines and issues) for JSON or YAML output.
//!         - [render_issue] / [render_report]: human readable text with the offending source
//!           line and a caret under the column at fault.
//!
//!     Rendering is purely textual. Printing, colors and exit codes belong to the caller.

use serde::Serialize;
use std::fmt::Write;

use super::issue::LineIssue;
use super::line::Line;
use super::preprocessing::PreProcessor;

/// Serializable outcome of a run.
#[derive(Debug, Clone, Serialize)]
pub struct Report<'a> {
    pub line_count: usize,
    pub issue_count: usize,
    pub lines: &'a [Line],
    pub issues: Vec<&'a LineIssue>,
}

impl<'a> Report<'a> {
    pub fn new(preprocessor: &'a PreProcessor) -> Self {
        Self {
            line_count: preprocessor.line_count(),
            issue_count: preprocessor.issue_count(),
            lines: preprocessor.lines(),
            issues: preprocessor.all_issues().collect(),
        }
    }
}

impl PreProcessor {
    pub fn report(&self) -> Report<'_> {
        Report::new(self)
    }
}

/// Render one issue against the source it was found in.
///
/// ```text
/// error: Invalid line number - must be a parseable integer
///   --> line 3, column 1
///    |
///  3 | ABCDEF MOVE A TO B.
///    | ^
/// ```
///
/// When the line is not found in `source` only the header is produced.
pub fn render_issue(source: &[String], issue: &LineIssue) -> String {
    let mut out = String::new();
    let display_line = issue.line_number() + 1;
    let _ = writeln!(out, "error: {}", issue.message());
    let _ = write!(out, "  --> line {}, column {}", display_line, issue.column() + 1);
    if let Some(given) = issue.associated_line_no() {
        let _ = write!(out, " (line number {})", given);
    }
    out.push('\n');

    let Some(text) = source.get(issue.line_number()) else {
        return out;
    };
    let gutter = display_line.to_string().len();
    let _ = writeln!(out, "{:gutter$} |", "");
    let _ = writeln!(out, "{} | {}", display_line, text);
    let _ = writeln!(out, "{:gutter$} | {}^", "", caret_padding(text, issue.column()));
    out
}

/// Padding that lines a caret up under `column` of `text`.
///
/// Tabs are copied so the terminal expands them the same way on both rows.
fn caret_padding(text: &str, column: usize) -> String {
    let mut padding: String = text
        .chars()
        .take(column)
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect();
    let short = column.saturating_sub(padding.chars().count());
    padding.extend(std::iter::repeat(' ').take(short));
    padding
}

/// Render every issue of a run followed by a one-line summary.
pub fn render_report(preprocessor: &PreProcessor, show_source: bool) -> String {
    let mut out = String::new();
    for issue in preprocessor.all_issues() {
        if show_source {
            out.push_str(&render_issue(preprocessor.full_text(), issue));
            out.push('\n');
        } else {
            let _ = writeln!(out, "{}", issue);
        }
    }
    let _ = writeln!(
        out,
        "{} lines, {} issues",
        preprocessor.line_count(),
        preprocessor.issue_count()
    );
    out
}

/// One row per classified line: physical number, given number, indicator, code start and code.
pub fn render_lines(preprocessor: &PreProcessor) -> String {
    let mut out = String::new();
    for line in preprocessor.lines() {
        let _ = writeln!(
            out,
            "{:>5} {:>6} {:<12} {:>4} {}",
            line.line_number(),
            line.given_line_no().unwrap_or("-"),
            line.indicator().to_string(),
            line.code_start()
                .map(|start| start.to_string())
                .unwrap_or_else(|| "-".to_string()),
            line.code_line().unwrap_or("")
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colfmt::preprocessing::preprocess;

    #[test]
    fn test_render_issue_points_at_column() {
        let pre = preprocess("000100 IDENTIFICATION DIVISION.\n000200/    PAGE").unwrap();
        let issue = &pre.issues_for(1)[0];
        insta::assert_snapshot!(render_issue(pre.full_text(), issue).trim_end(), @r###"
        error: Invalid line status character - must be either empty, '*' or '-'
          --> line 2, column 7 (line number 000200)
          |
        2 | 000200/    PAGE
          |       ^
        "###);
    }

    #[test]
    fn test_caret_keeps_tabs_before_column() {
        let pre = preprocess("\t00001/    PAGE").unwrap();
        let issue = &pre.issues_for(0)[0];
        let rendered = render_issue(pre.full_text(), issue);
        assert!(rendered.contains("1 | \t00001/    PAGE\n"));
        assert!(rendered.ends_with("  | \t     ^\n"));
    }

    #[test]
    fn test_caret_padding_past_line_end() {
        assert_eq!(caret_padding("ab", 4), "    ");
        assert_eq!(caret_padding("\tab", 2), "\t ");
    }

    #[test]
    fn test_render_issue_without_source_line() {
        let pre = preprocess("ABCDEF").unwrap();
        let rendered = render_issue(&[], &pre.issues_for(0)[0]);
        assert_eq!(
            rendered,
            "error: Invalid line number - must be a parseable integer\n  --> line 1, column 1\n"
        );
    }

    #[test]
    fn test_render_report_summary() {
        let pre = preprocess("ABCDEF MOVE 1 TO X.\n       STOP RUN.").unwrap();
        let rendered = render_report(&pre, false);
        assert_eq!(
            rendered,
            "line 1, column 1: Invalid line number - must be a parseable integer\n2 lines, 1 issues\n"
        );
    }

    #[test]
    fn test_report_serializes_lines_and_issues() {
        let pre = preprocess("000100*COMMENT\n000200 STOP RUN.").unwrap();
        let value = serde_json::to_value(pre.report()).unwrap();
        assert_eq!(value["line_count"], 2);
        assert_eq!(value["issue_count"], 0);
        assert_eq!(value["lines"][0]["indicator"]["kind"], "comment");
        assert_eq!(value["lines"][1]["code"]["start"], 7);
        assert_eq!(value["lines"][1]["code"]["text"], "STOP RUN.");
        assert_eq!(value["lines"][1]["given_line_no"], "000200");
    }

    #[test]
    fn test_render_lines() {
        let pre = preprocess("000100 STOP RUN.").unwrap();
        assert_eq!(
            render_lines(&pre),
            "    0 000100 blank           7 STOP RUN.\n"
        );
    }
}
