//! The usage index engine.
//!
//! Keeps two views of the same occurrence data: which files call a
//! function, and which functions a file calls. Both are written only
//! through [`UsageIndex::record`], so every (function, file, count) triple
//! is present in both or in neither.
//!
//! Files are keyed by the path exactly as given (`a/b.py` and `a/./b.py`
//! are two files), compared as raw `OsStr` rather than by path components.

use indexmap::IndexMap;
use std::ffi::OsString;
use std::fmt;
use std::path::Path;

use super::types::{ExclusiveUsage, FileReport, Occurrences};
use crate::pattern::CallPattern;

/// Function→Files and File→Functions occurrence indexes for one run.
#[derive(Debug, Clone, Default)]
pub struct UsageIndex {
    /// Index: function name -> (file path -> calls in that file).
    function_to_files: IndexMap<String, Occurrences<OsString>>,
    /// Index: file path -> (function name -> calls in that file).
    file_to_functions: IndexMap<OsString, Occurrences<String>>,
}

impl UsageIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    // ─── Writes ─────────────────────────────────────────────────

    /// Register a scanned file so it is reported even without matches.
    pub fn add_file(&mut self, path: &Path) {
        if !self.file_to_functions.contains_key(path.as_os_str()) {
            self.file_to_functions
                .insert(path.as_os_str().to_os_string(), Occurrences::new());
        }
    }

    /// Count one call of `function` from `path` in both indexes.
    pub fn record(&mut self, function: &str, path: &Path) {
        *self
            .function_to_files
            .entry(function.to_string())
            .or_default()
            .entry(path.as_os_str().to_os_string())
            .or_insert(0) += 1;
        *self
            .file_to_functions
            .entry(path.as_os_str().to_os_string())
            .or_default()
            .entry(function.to_string())
            .or_insert(0) += 1;
    }

    /// Register `path` and record every call `pattern` finds in `content`.
    /// Returns the number of call sites found.
    pub fn scan_content(&mut self, path: &Path, content: &str, pattern: &CallPattern) -> usize {
        self.add_file(path);
        let names = pattern.function_names(content);
        for name in &names {
            self.record(name, path);
        }
        names.len()
    }

    // ─── Queries ────────────────────────────────────────────────

    /// Files calling `function`, with per-file counts.
    pub fn files_using(&self, function: &str) -> Option<&Occurrences<OsString>> {
        self.function_to_files.get(function)
    }

    /// Functions called from `path`, with counts.
    pub fn functions_in(&self, path: &Path) -> Option<&Occurrences<String>> {
        self.file_to_functions.get(path.as_os_str())
    }

    /// Scanned files in first-seen order.
    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.file_to_functions.keys().map(Path::new)
    }

    /// True when `function` is called from exactly one file.
    pub fn is_exclusive(&self, function: &str) -> bool {
        self.files_using(function)
            .is_some_and(|files| files.len() == 1)
    }

    /// Functions only `path` calls, in the order `path` first called them.
    pub fn exclusive_usages(&self, path: &Path) -> Vec<ExclusiveUsage> {
        let Some(functions) = self.functions_in(path) else {
            return Vec::new();
        };
        functions
            .iter()
            .filter(|(function, _)| self.is_exclusive(function))
            .map(|(function, &count)| ExclusiveUsage {
                function: function.clone(),
                count,
            })
            .collect()
    }

    /// One report per scanned file, in first-seen order.
    pub fn report(&self) -> Vec<FileReport> {
        self.files()
            .map(|file| FileReport {
                file: file.to_path_buf(),
                exclusive: self.exclusive_usages(file),
            })
            .collect()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            file_count: self.file_to_functions.len(),
            function_count: self.function_to_files.len(),
            call_sites: self
                .file_to_functions
                .values()
                .flat_map(|functions| functions.values())
                .sum(),
            exclusive_functions: self
                .function_to_files
                .values()
                .filter(|files| files.len() == 1)
                .count(),
        }
    }
}

/// Summary counts for an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexStats {
    pub file_count: usize,
    pub function_count: usize,
    pub call_sites: usize,
    pub exclusive_functions: usize,
}

impl fmt::Display for IndexStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} files, {} functions ({} exclusive), {} call sites",
            self.file_count, self.function_count, self.exclusive_functions, self.call_sites
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;
    use std::path::PathBuf;

    fn x_and_y() -> UsageIndex {
        let pattern = CallPattern::default();
        let mut index = UsageIndex::new();
        index.scan_content(
            Path::new("x.py"),
            "self.foo()\nself.bar()\nself.foo()\n",
            &pattern,
        );
        index.scan_content(Path::new("y.py"), "self.foo()\n", &pattern);
        index
    }

    #[test]
    fn test_empty_index() {
        let index = UsageIndex::new();
        assert!(index.report().is_empty());
        assert_eq!(index.stats().file_count, 0);
        assert!(!index.is_exclusive("foo"));
    }

    #[test]
    fn test_record_updates_both_views() {
        let mut index = UsageIndex::new();
        index.record("load", Path::new("a.py"));
        index.record("load", Path::new("a.py"));
        index.record("load", Path::new("b.py"));

        let files = index.files_using("load").unwrap();
        assert_eq!(files[OsStr::new("a.py")], 2);
        assert_eq!(files[OsStr::new("b.py")], 1);
        assert_eq!(index.functions_in(Path::new("a.py")).unwrap()["load"], 2);
        assert_eq!(index.functions_in(Path::new("b.py")).unwrap()["load"], 1);
    }

    #[test]
    fn test_views_stay_consistent() {
        let index = x_and_y();
        for (function, files) in &index.function_to_files {
            for (file, count) in files {
                assert_eq!(index.file_to_functions[file][function], *count);
            }
        }
        for (file, functions) in &index.file_to_functions {
            for (function, count) in functions {
                assert_eq!(index.function_to_files[function][file], *count);
            }
        }
    }

    #[test]
    fn test_shared_function_excluded() {
        let index = x_and_y();
        assert!(!index.is_exclusive("foo"));
        assert!(index.is_exclusive("bar"));

        let report = index.report();
        assert_eq!(report.len(), 2);
        assert_eq!(report[0].file, PathBuf::from("x.py"));
        assert_eq!(
            report[0].exclusive,
            vec![ExclusiveUsage {
                function: "bar".to_string(),
                count: 1
            }]
        );
        assert!(report[1].exclusive.is_empty());
    }

    #[test]
    fn test_counts_are_per_file() {
        let pattern = CallPattern::default();
        let mut index = UsageIndex::new();
        index.scan_content(Path::new("a.py"), "self.run() self.run() self.run()", &pattern);
        index.scan_content(Path::new("b.py"), "self.stop()", &pattern);

        let report = index.report();
        assert_eq!(report[0].exclusive[0].count, 3);
        assert_eq!(report[1].exclusive[0].count, 1);
    }

    #[test]
    fn test_first_encountered_order() {
        let pattern = CallPattern::default();
        let mut index = UsageIndex::new();
        index.scan_content(
            Path::new("a.py"),
            "self.zeta() self.alpha() self.zeta() self.mid()",
            &pattern,
        );
        let names: Vec<String> = index
            .exclusive_usages(Path::new("a.py"))
            .into_iter()
            .map(|u| u.function)
            .collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_zero_match_file_is_reported() {
        let pattern = CallPattern::default();
        let mut index = UsageIndex::new();
        let found = index.scan_content(Path::new("empty.py"), "print('hi')\n", &pattern);
        assert_eq!(found, 0);

        let report = index.report();
        assert_eq!(report.len(), 1);
        assert!(report[0].exclusive.is_empty());
        assert!(index.functions_in(Path::new("empty.py")).unwrap().is_empty());
    }

    #[test]
    fn test_same_file_twice_accumulates() {
        let pattern = CallPattern::default();
        let mut index = UsageIndex::new();
        index.scan_content(Path::new("a.py"), "self.go()", &pattern);
        index.scan_content(Path::new("a.py"), "self.go()", &pattern);

        let report = index.report();
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].exclusive[0].count, 2);
    }

    #[test]
    fn test_paths_keyed_as_given() {
        let pattern = CallPattern::default();
        let mut index = UsageIndex::new();
        index.scan_content(Path::new("sub/a.py"), "self.foo()", &pattern);
        index.scan_content(Path::new("sub/./a.py"), "self.foo()", &pattern);

        assert!(!index.is_exclusive("foo"));
        let files: Vec<PathBuf> = index.report().into_iter().map(|r| r.file).collect();
        assert_eq!(files, vec![PathBuf::from("sub/a.py"), PathBuf::from("sub/./a.py")]);
        assert_eq!(files[1].as_os_str(), OsStr::new("sub/./a.py"));
    }

    #[test]
    fn test_unknown_file_has_no_usages() {
        let index = x_and_y();
        assert!(index.exclusive_usages(Path::new("z.py")).is_empty());
    }

    #[test]
    fn test_stats() {
        let stats = x_and_y().stats();
        assert_eq!(
            stats,
            IndexStats {
                file_count: 2,
                function_count: 2,
                call_sites: 4,
                exclusive_functions: 1,
            }
        );
        assert_eq!(
            stats.to_string(),
            "2 files, 2 functions (1 exclusive), 4 call sites"
        );
    }
}
