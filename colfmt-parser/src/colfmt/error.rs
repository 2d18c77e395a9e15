//! Error types for preprocessing
//!
//! Only conditions that stop a run are errors. Rule violations on individual lines are
//! collected as [LineIssue](super::issue::LineIssue)s instead.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal preprocessing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreprocessError {
    /// The input has no line with any non-whitespace content.
    #[error("input is empty or contains only blank lines")]
    EmptyInput,
}

/// Errors raised while loading and preprocessing a source.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Preprocess(#[from] PreprocessError),
}

pub type PreprocessResult<T> = Result<T, PreprocessError>;
