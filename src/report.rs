//! Report rendering — plain text (the default) and JSON.

use clap::ValueEnum;
use serde::Deserialize;
use std::fmt::Write;

use crate::error::Result;
use crate::index::FileReport;

/// Output format for the exclusivity report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render reports in `format`.
pub fn render(reports: &[FileReport], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(reports)),
        OutputFormat::Json => render_json(reports),
    }
}

/// One header per file, then one indented line per exclusive function.
pub fn render_text(reports: &[FileReport]) -> String {
    let mut out = String::new();
    for report in reports {
        let _ = writeln!(out, "File {} exclusively uses: ", report.file.display());
        for usage in &report.exclusive {
            let _ = writeln!(out, "  {} ({} times)", usage.function, usage.count);
        }
    }
    out
}

pub fn render_json(reports: &[FileReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}
