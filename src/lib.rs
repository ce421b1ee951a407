//! # function-usages
//!
//! Find the functions each source file calls that no other file in the
//! scanned set calls. Useful before splitting or moving code: an
//! "exclusive" function can usually move along with its only caller.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use usages::{build_index, CallPattern};
//!
//! let pattern = CallPattern::default(); // matches `self.name(`
//! let index = build_index(&["a.py", "b.py"], &pattern)?;
//! for report in index.report() {
//!     println!("{}: {:?}", report.file.display(), report.exclusive);
//! }
//! # Ok::<(), usages::UsageError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod index;
pub mod pattern;
pub mod report;

// Re-exports for convenience
pub use config::UsageConfig;
pub use error::{Result, UsageError};
pub use index::{build_index, ExclusiveUsage, FileReport, IndexStats, UsageIndex};
pub use pattern::{default_pattern, CallPattern};
pub use report::{render, render_json, render_text, OutputFormat};
