//! Uniter - A Python project summarizer and source consolidator
//!
//! This library walks a project directory, extracts structural metadata
//! (imports, functions, classes, docstrings) from its Python files, and
//! renders a Markdown summary report, an ASCII directory tree and a single
//! consolidated source file.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;
pub mod parsers;

// Re-export commonly used types
pub use crate::core::ProjectCollector;
pub use error::{ErrorSeverity, Result, ResultExt, UniterError};
pub use models::{
    config::Settings,
    file_record::{Analysis, ClassInfo, FileRecord, FunctionInfo, SourceAnalysis},
    tree::{DirectoryTree, TreeNode},
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
