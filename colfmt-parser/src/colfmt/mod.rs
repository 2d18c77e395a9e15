//! Fixed-column source preprocessing
//!
//!     Converts raw lines of a fixed-column source (sequence number, indicator, area A,
//!     area B) into classified [Line](line::Line) records plus a list of
//!     [LineIssue](issue::LineIssue)s for the lexer and reporters downstream.
//!
//!     Modules:
//!
//!         - layout         the column ranges and column-safe slicing
//!         - line           the classified line record
//!         - issue          per-line diagnostics
//!         - preprocessing  the run itself
//!         - report         serializable and text views of a run
//!         - loader         reading sources from files or strings

pub mod error;
pub mod issue;
pub mod layout;
pub mod line;
pub mod loader;
pub mod preprocessing;
pub mod report;

pub use error::{LoaderError, PreprocessError};
pub use issue::{IssueKind, LineIssue};
pub use line::{CodeText, Indicator, Line};
pub use loader::SourceLoader;
pub use preprocessing::{preprocess, IssueMap, PreProcessor};
pub use report::{render_issue, render_lines, render_report, Report};
