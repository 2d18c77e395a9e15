//! Output rendering for the CLI
//!
//! Turns a finished preprocessing run into the text, JSON or YAML the user asked for.

use colfmt_config::{ColfmtConfig, OutputFormat};
use colfmt_parser::colfmt::{render_lines, render_report, PreProcessor};

/// Output for `colfmt check`: issues (text) or the full report (json/yaml).
pub fn render_check(preprocessor: &PreProcessor, config: &ColfmtConfig) -> Result<String, String> {
    match config.output.format {
        OutputFormat::Text => {
            let mut out = String::new();
            if config.output.show_lines {
                out.push_str(&render_lines(preprocessor));
                out.push('\n');
            }
            out.push_str(&render_report(preprocessor, config.output.show_source));
            Ok(out)
        }
        OutputFormat::Json => serde_json::to_string_pretty(&preprocessor.report())
            .map(|json| json + "\n")
            .map_err(|e| format!("JSON serialization failed: {}", e)),
        OutputFormat::Yaml => serde_yaml::to_string(&preprocessor.report())
            .map_err(|e| format!("YAML serialization failed: {}", e)),
    }
}

/// Output for `colfmt lines`: one entry per classified line.
pub fn render_line_table(preprocessor: &PreProcessor, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Text => Ok(render_lines(preprocessor)),
        OutputFormat::Json => serde_json::to_string_pretty(preprocessor.lines())
            .map(|json| json + "\n")
            .map_err(|e| format!("JSON serialization failed: {}", e)),
        OutputFormat::Yaml => serde_yaml::to_string(preprocessor.lines())
            .map_err(|e| format!("YAML serialization failed: {}", e)),
    }
}
