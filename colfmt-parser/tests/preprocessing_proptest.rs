//! Property-based tests for the preprocessor
//!
//! These tests check the run-level guarantees over arbitrary fixed-column input:
//! - one record per line left after trimming
//! - trimming only touches blank lines at the edges
//! - comment lines never carry code, and code only starts after space separators
//! - running twice yields the same result

use colfmt_parser::colfmt::layout::{is_blank, is_space_separator, CODE_AREA};
use colfmt_parser::colfmt::{PreProcessor, PreprocessError};
use proptest::prelude::*;

/// Lines built from the characters that matter to the column rules
fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Blank lines
        "[ \t]{0,8}",
        // Well-formed lines: sequence number, indicator, code
        ("[0-9]{6}|[ ]{6}", "[ *-]", "[ ]{0,8}[A-Z0-9. ']{0,60}")
            .prop_map(|(seq, ind, code)| format!("{seq}{ind}{code}")),
        // Anything, including short lines and multi-byte characters
        "\\PC{0,90}",
    ]
}

fn source_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(line_strategy(), 0..30)
}

proptest! {
    #[test]
    fn one_record_per_trimmed_line(source in source_strategy()) {
        let mut pre = PreProcessor::new(source.clone());
        match pre.preprocess() {
            Ok(()) => {
                let trimmed = pre.full_text();
                prop_assert_eq!(pre.lines().len(), trimmed.len());
                prop_assert_eq!(pre.line_count(), trimmed.len());
                prop_assert!(!is_blank(&trimmed[0]));
                prop_assert!(!is_blank(&trimmed[trimmed.len() - 1]));

                // The trimmed input is a contiguous window of the original.
                let first = source.iter().position(|l| !is_blank(l)).unwrap();
                prop_assert_eq!(trimmed, &source[first..first + trimmed.len()]);
            }
            Err(err) => {
                prop_assert_eq!(err, PreprocessError::EmptyInput);
                prop_assert!(source.iter().all(|l| is_blank(l)));
            }
        }
    }

    #[test]
    fn code_fields_are_consistent(source in source_strategy()) {
        let mut pre = PreProcessor::new(source);
        if pre.preprocess().is_err() {
            return Ok(());
        }
        for line in pre.lines() {
            prop_assert!(!(line.is_comment() && line.is_continuation()));
            if line.is_comment() {
                prop_assert!(line.code().is_none());
            }
            prop_assert_eq!(line.code_start().is_some(), line.code_line().is_some());
            if let Some(code) = line.code() {
                prop_assert!(CODE_AREA.contains(&code.start));
                prop_assert!(!code.text.is_empty());
                let skipped: Vec<char> = line
                    .raw_text()
                    .chars()
                    .skip(CODE_AREA.start)
                    .take(code.start - CODE_AREA.start)
                    .collect();
                prop_assert!(skipped.iter().all(|c| is_space_separator(*c)));
            }
            for issue in pre.issues_for(line.line_number()) {
                prop_assert_eq!(issue.line_number(), line.line_number());
                prop_assert!(issue.column() == 0 || issue.column() == 6);
            }
        }
    }

    #[test]
    fn preprocess_is_idempotent(source in source_strategy()) {
        let mut pre = PreProcessor::new(source);
        let first = pre.preprocess();
        let lines = pre.lines().to_vec();
        let issues = pre.issues().clone();

        let second = pre.preprocess();
        prop_assert_eq!(first, second);
        prop_assert_eq!(pre.lines(), lines.as_slice());
        prop_assert_eq!(pre.issues(), &issues);
    }
}
