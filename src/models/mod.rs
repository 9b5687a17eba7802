//! Data models and structures for Uniter

pub mod config;
pub mod file_record;
pub mod summary;
pub mod tree;

pub use config::{PartialSettings, Settings};
pub use file_record::{Analysis, ClassInfo, FileRecord, FunctionInfo, SourceAnalysis};
pub use summary::ProjectSummary;
pub use tree::{DirectoryTree, TreeNode};
