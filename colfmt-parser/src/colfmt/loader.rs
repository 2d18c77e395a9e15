//! Source loading
//!
//! [SourceLoader] reads fixed-column source from a file or a string and hands the physical
//! lines to a [PreProcessor]. Decoding and line splitting happen here so the preprocessor
//! only ever sees an in-memory list of lines.
//!
//! ```rust,ignore
//! use colfmt_parser::colfmt::loader::SourceLoader;
//!
//! let pre = SourceLoader::from_path("PAYROLL.cbl")?.preprocess()?;
//! for issue in pre.all_issues() {
//!     eprintln!("{}", issue);
//! }
//! ```

use log::debug;
use std::fs;
use std::path::Path;

use super::error::LoaderError;
use super::preprocessing::PreProcessor;

/// Holds source text until it is preprocessed.
#[derive(Debug, Clone)]
pub struct SourceLoader {
    source: String,
}

impl SourceLoader {
    /// Read a UTF-8 source file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded {} bytes from {}", source.len(), path.display());
        Ok(Self { source })
    }

    pub fn from_string<S: Into<String>>(source: S) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Physical lines, split on `\n` or `\r\n`.
    pub fn lines(&self) -> Vec<&str> {
        self.source.lines().collect()
    }

    /// Build a preprocessor over the loaded lines and run it.
    pub fn preprocess(&self) -> Result<PreProcessor, LoaderError> {
        let mut preprocessor = PreProcessor::new(self.source.lines());
        preprocessor.preprocess()?;
        Ok(preprocessor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colfmt::error::PreprocessError;

    #[test]
    fn test_from_string() {
        let loader = SourceLoader::from_string("000100 STOP RUN.\n");
        assert_eq!(loader.lines(), vec!["000100 STOP RUN."]);
        let pre = loader.preprocess().unwrap();
        assert_eq!(pre.code_line(0), Some("STOP RUN."));
    }

    #[test]
    fn test_missing_file() {
        let err = SourceLoader::from_path("does/not/exist.cbl").unwrap_err();
        assert!(matches!(err, LoaderError::Io { .. }));
        assert!(err.to_string().starts_with("cannot read does/not/exist.cbl"));
    }

    #[test]
    fn test_blank_source_is_an_error() {
        let err = SourceLoader::from_string("\n   \n").preprocess().unwrap_err();
        assert!(matches!(
            err,
            LoaderError::Preprocess(PreprocessError::EmptyInput)
        ));
    }
}
