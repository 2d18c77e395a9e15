//! Fixed column layout
//!
//!     Every physical line is read against one fixed set of column ranges. Ranges are 0-based
//!     and end-exclusive, counted in characters:
//!
//!         - [0, 6)    sequence (line number) area, optional
//!         - 6         indicator column: blank, comment marker or continuation marker
//!         - [7, 11)   area A (divisions, sections, paragraph names)
//!         - [11, 72)  area B (statements)
//!         - [72, 80)  identification area, never part of the code
//!
//!     Lines can be shorter than any of these ranges. [column_slice] clips a range to the
//!     actual line length, so callers never index past the end of a line.
//!
//!     The layout is not configurable.

use std::ops::Range;

/// Columns holding the optional user-supplied sequence number.
pub const LINE_NUMBER_AREA: Range<usize> = 0..6;

/// Column holding the line indicator.
pub const INDICATOR_COL: usize = 6;

/// Area A: division, section and paragraph headers start here.
pub const AREA_A: Range<usize> = 7..11;

/// Area B: statements.
pub const AREA_B: Range<usize> = 11..72;

/// Union of area A and area B, the region code is extracted from.
pub const CODE_AREA: Range<usize> = AREA_A.start..AREA_B.end;

/// Trailing identification columns, ignored by code extraction.
pub const IDENTIFICATION_AREA: Range<usize> = 72..80;

/// Indicator marking the whole line as a comment.
pub const COMMENT_MARKER: char = '*';

/// Indicator marking the line as a continuation of the previous one.
pub const CONTINUATION_MARKER: char = '-';

/// Returns the part of `text` covering the character columns in `columns`.
///
/// The range is clipped to the length of `text`; a range starting at or after the end of
/// the line yields an empty slice.
pub fn column_slice(text: &str, columns: Range<usize>) -> &str {
    let start = byte_offset(text, columns.start);
    let end = byte_offset(text, columns.end.max(columns.start));
    &text[start..end]
}

/// Number of character columns in `text`.
pub fn column_count(text: &str) -> usize {
    text.chars().count()
}

/// Character at column `col`, if the line reaches it.
pub fn char_at(text: &str, col: usize) -> Option<char> {
    text.chars().nth(col)
}

/// True for empty text or text made only of blank characters.
pub fn is_blank(text: &str) -> bool {
    text.chars().all(is_blank_char)
}

/// Whitespace that makes a column blank.
///
/// Control whitespace (tab, line feed, vertical tab, form feed, carriage return and the
/// 0x1C-0x1F separators) plus the Unicode space separators, except the non-breaking ones
/// (U+00A0, U+2007, U+202F), which count as content.
pub fn is_blank_char(c: char) -> bool {
    match c {
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | '\u{1C}'..='\u{1F}' => true,
        '\u{A0}' | '\u{2007}' | '\u{202F}' => false,
        c => is_space_separator(c),
    }
}

/// Unicode space, line and paragraph separators (`Zs`, `Zl`, `Zp`).
///
/// Tabs are not space separators, so a tab in the code area marks where the code starts.
pub fn is_space_separator(c: char) -> bool {
    matches!(
        c,
        ' ' | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// Strip blank characters from both ends of `text`.
pub fn trim_blank(text: &str) -> &str {
    text.trim_matches(is_blank_char)
}

fn byte_offset(text: &str, col: usize) -> usize {
    text.char_indices()
        .nth(col)
        .map(|(offset, _)| offset)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_area_spans_both_areas() {
        assert_eq!(CODE_AREA, 7..72);
        assert_eq!(AREA_A.end, AREA_B.start);
    }

    #[test]
    fn test_column_slice_clips_to_line_length() {
        assert_eq!(column_slice("0010", LINE_NUMBER_AREA), "0010");
        assert_eq!(column_slice("001000 MOVE", LINE_NUMBER_AREA), "001000");
        assert_eq!(column_slice("short", CODE_AREA), "");
        assert_eq!(column_slice("", LINE_NUMBER_AREA), "");
    }

    #[test]
    fn test_column_slice_counts_characters_not_bytes() {
        let line = "ÄÖÜ123 DISPLAY";
        assert_eq!(column_slice(line, LINE_NUMBER_AREA), "ÄÖÜ123");
        assert_eq!(column_slice(line, CODE_AREA), "DISPLAY");
        assert_eq!(char_at(line, INDICATOR_COL), Some(' '));
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \t  "));
        assert!(!is_blank("  x "));
        assert!(!is_blank("\u{A0}"));
        assert!(is_blank("\u{3000}\u{2028}"));
    }

    #[test]
    fn test_space_separators_exclude_tab() {
        assert!(is_space_separator(' '));
        assert!(is_space_separator('\u{A0}'));
        assert!(!is_space_separator('\t'));
        assert!(!is_space_separator('x'));
    }

    #[test]
    fn test_trim_blank_keeps_non_breaking_space() {
        assert_eq!(trim_blank(" \tMOVE X.\t "), "MOVE X.");
        assert_eq!(trim_blank("\u{A0}12 "), "\u{A0}12");
    }

    #[test]
    fn test_column_count() {
        assert_eq!(column_count("abc"), 3);
        assert_eq!(column_count("é"), 1);
    }
}
