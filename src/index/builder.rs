//! Index builder — reads the input files and fills a usage index.
//!
//! Files are read one at a time, in input order. The first path that is not
//! an existing regular file aborts the build; later files are never touched.

use std::fs;
use std::path::Path;
use tracing::{debug, info};

use super::engine::UsageIndex;
use crate::error::{Result, UsageError};
use crate::pattern::CallPattern;

/// Build a usage index from `files`, scanning each with `pattern`.
pub fn build_index<P: AsRef<Path>>(files: &[P], pattern: &CallPattern) -> Result<UsageIndex> {
    let mut index = UsageIndex::new();
    debug!(
        pattern = pattern.as_str(),
        no_parenthesis = pattern.no_parenthesis(),
        files = files.len(),
        "building usage index"
    );

    for file in files {
        let path = file.as_ref();
        if !path.is_file() {
            return Err(UsageError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|source| UsageError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let found = index.scan_content(path, &content, pattern);
        debug!(file = %path.display(), call_sites = found, "scanned file");
    }

    let stats = index.stats();
    info!(pattern = pattern.as_str(), %stats, "usage index built");

    Ok(index)
}
