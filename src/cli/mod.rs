//! CLI module for function-usages.
//!
//! Usage:
//!   function-usages a.py b.py c.py
//!   function-usages --pattern 'TODO:' --no-paranthesis src/*.py
//!   function-usages --format json src/*.py

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::config::UsageConfig;
use crate::error::Result;
use crate::index::build_index;
use crate::pattern::CallPattern;
use crate::report::{self, OutputFormat};

#[derive(Debug, Parser)]
#[command(name = "function-usages", version)]
#[command(about = "Find function usages in a list of files")]
pub struct Cli {
    /// A regex pattern to search for. Expects the last character to be an open parenthesis
    #[arg(long)]
    pub pattern: Option<String>,

    /// Do not expect the last character of the pattern to be an open parenthesis
    #[arg(long = "no-paranthesis", alias = "no-parenthesis")]
    pub no_parenthesis: bool,

    /// Output format (default: text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Config file (default: ./function-usages.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Files to search for function usages
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,
}

/// Effective settings after merging flags over config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pattern: Option<String>,
    pub no_parenthesis: bool,
    pub format: OutputFormat,
}

impl Cli {
    pub fn settings(&self, config: UsageConfig) -> Settings {
        Settings {
            pattern: self.pattern.clone().or(config.pattern),
            no_parenthesis: self.no_parenthesis || config.no_parenthesis,
            format: self.format.or(config.format).unwrap_or_default(),
        }
    }
}

/// Load config, scan the files and render the report.
pub fn run(cli: &Cli, cwd: &Path) -> Result<String> {
    let config = UsageConfig::discover(cli.config.as_deref(), cwd)?;
    let settings = cli.settings(config);

    let pattern = CallPattern::new(settings.pattern.as_deref(), settings.no_parenthesis)?;
    let index = build_index(&cli.files, &pattern)?;
    report::render(&index.report(), settings.format)
}
