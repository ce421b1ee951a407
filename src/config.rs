//! Optional TOML configuration.
//!
//! ```toml
//! pattern = 'this\.([a-zA-Z0-9_]+\()'
//! no_parenthesis = false
//! format = "json"
//! ```
//!
//! Command-line flags win over the file; the file wins over built-in defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Result, UsageError};
use crate::report::OutputFormat;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "function-usages.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UsageConfig {
    /// Call-site pattern replacing the built-in one.
    pub pattern: Option<String>,
    /// Keep matches verbatim instead of dropping their last character.
    pub no_parenthesis: bool,
    pub format: Option<OutputFormat>,
}

impl UsageConfig {
    /// Load config from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| UsageError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self::parse(&raw).map_err(|message| UsageError::Config {
            path: path.to_path_buf(),
            message,
        })?;
        debug!(config = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `explicit` if given, else the default file if it exists, else defaults.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let fallback: PathBuf = cwd.join(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            Self::load(&fallback)
        } else {
            Ok(Self::default())
        }
    }

    fn parse(raw: &str) -> std::result::Result<Self, String> {
        toml::from_str(raw).map_err(|e| e.to_string())
    }
}
