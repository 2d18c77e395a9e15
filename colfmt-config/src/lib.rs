//! Shared configuration loader for the colfmt toolchain.
//!
//! Every key has a value in `defaults/colfmt.default.toml`, which is compiled in.
//! A [`Loader`] stacks project files and command-line flags over it and produces
//! a [`ColfmtConfig`].
//!
//! The column layout itself is fixed and has no configuration knobs; only how
//! results are presented and how the exit status is decided can be configured.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/colfmt.default.toml");

/// Top-level configuration consumed by colfmt applications.
#[derive(Debug, Clone, Deserialize)]
pub struct ColfmtConfig {
    pub output: OutputConfig,
    pub check: CheckConfig,
}

/// How preprocessing results are printed.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub show_source: bool,
    pub show_lines: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckConfig {
    pub fail_on_issues: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

impl fmt::Display for ColfmtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[output]")?;
        writeln!(f, "format = \"{}\"", self.output.format)?;
        writeln!(f, "show_source = {}", self.output.show_source)?;
        writeln!(f, "show_lines = {}", self.output.show_lines)?;
        writeln!(f)?;
        writeln!(f, "[check]")?;
        writeln!(f, "fail_on_issues = {}", self.check.fail_on_issues)
    }
}

/// Builds a [`ColfmtConfig`] from the embedded defaults, then any `colfmt.toml`
/// files, then command-line overrides. Later layers win key by key.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Loader holding only `colfmt.default.toml`.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Add a TOML file the user asked for explicitly (`--config`); `build` fails if it
    /// does not exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer_toml(path.as_ref(), true)
    }

    /// Add a TOML file that may or may not be present, such as `colfmt.toml` in the
    /// working directory.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer_toml(path.as_ref(), false)
    }

    /// Set one dotted key, e.g. `output.format` from `--format`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge every layer and check it against the schema. Unknown output formats and
    /// mistyped values surface here.
    pub fn build(self) -> Result<ColfmtConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }

    fn layer_toml(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The built-in configuration with nothing layered on top.
pub fn load_defaults() -> Result<ColfmtConfig, ConfigError> {
    Loader::new().build()
}
