//! Per-file records and the structural metadata extracted from source files

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One enumerated file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Path relative to the scan root
    pub path: PathBuf,

    /// File size in bytes at enumeration time
    pub size: u64,

    /// Extension including the leading dot (`.py`)
    pub extension: String,

    /// Structural metadata, present only for analyzable files
    pub analysis: Option<Analysis>,
}

impl FileRecord {
    /// Path rendered with forward slashes, as shown in reports
    pub fn display_path(&self) -> String {
        self.path
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Whether this file carries structural analysis
    pub fn is_analyzable(&self) -> bool {
        self.analysis.is_some()
    }

    /// Functions of the file, empty when there is no successful analysis
    pub fn functions(&self) -> &[FunctionInfo] {
        self.analysis.as_ref().map(Analysis::functions).unwrap_or(&[])
    }

    /// Classes of the file, empty when there is no successful analysis
    pub fn classes(&self) -> &[ClassInfo] {
        self.analysis.as_ref().map(Analysis::classes).unwrap_or(&[])
    }
}

/// Outcome of analysing one source file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Analysis {
    /// The file parsed and its metadata was extracted
    Parsed(SourceAnalysis),
    /// Reading or parsing failed
    Failed { message: String },
}

impl Analysis {
    pub fn failed(message: impl Into<String>) -> Self {
        Analysis::Failed {
            message: message.into(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Analysis::Failed { .. })
    }

    pub fn parsed(&self) -> Option<&SourceAnalysis> {
        match self {
            Analysis::Parsed(analysis) => Some(analysis),
            Analysis::Failed { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Analysis::Parsed(_) => None,
            Analysis::Failed { message } => Some(message),
        }
    }

    pub fn imports(&self) -> &[String] {
        self.parsed().map(|a| a.imports.as_slice()).unwrap_or(&[])
    }

    pub fn functions(&self) -> &[FunctionInfo] {
        self.parsed().map(|a| a.functions.as_slice()).unwrap_or(&[])
    }

    pub fn classes(&self) -> &[ClassInfo] {
        self.parsed().map(|a| a.classes.as_slice()).unwrap_or(&[])
    }

    /// Line count, zero for failed analyses
    pub fn lines(&self) -> usize {
        self.parsed().map(|a| a.lines).unwrap_or(0)
    }
}

/// Structural metadata of a successfully parsed source file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceAnalysis {
    /// Import identifiers in discovery order, not deduplicated
    pub imports: Vec<String>,

    /// Every function definition in the file, methods included
    pub functions: Vec<FunctionInfo>,

    /// Every class definition in the file
    pub classes: Vec<ClassInfo>,

    /// Module docstring
    pub docstring: Option<String>,

    /// Number of line breaks plus one
    pub lines: usize,
}

/// A function definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionInfo {
    pub name: String,
    /// Positional parameter names in declaration order
    pub args: Vec<String>,
    pub docstring: Option<String>,
    /// 1-based line of the `def` keyword
    pub line: usize,
}

/// A class definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassInfo {
    pub name: String,
    /// Names of the functions declared directly in the class body
    pub methods: Vec<String>,
    pub docstring: Option<String>,
    /// 1-based line of the `class` keyword
    pub line: usize,
}

/// Count lines the way reports do: line breaks plus one
pub fn count_lines(text: &str) -> usize {
    text.matches('\n').count() + 1
}
