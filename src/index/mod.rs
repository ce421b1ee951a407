//! Usage index module — the dual occurrence maps and how they are built.
//!
//! Provides the index data model, the exclusivity query, and the
//! sequential file scanner that fills an index from disk.

pub mod builder;
pub mod engine;
pub mod types;

pub use builder::build_index;
pub use engine::{IndexStats, UsageIndex};
pub use types::{ExclusiveUsage, FileReport, Occurrences};
