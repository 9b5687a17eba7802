//! Configuration-related data structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Extension of the files that get structural analysis
pub const ANALYZABLE_EXTENSION: &str = ".py";

/// Default size limit for embedding a file in the consolidated output
pub const DEFAULT_MAX_FILE_SIZE: u64 = 50_000;

/// Default report file name
pub const DEFAULT_REPORT_FILE: &str = "project_summary.md";

/// Default consolidated code file name
pub const DEFAULT_CONSOLIDATED_FILE: &str = "consolidated_code.py";

/// Main configuration settings for Uniter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Root directory to scan
    pub scan_path: PathBuf,

    /// Directory names pruned from traversal
    pub exclude_dirs: Vec<String>,

    /// File name patterns hidden from the directory tree (`*` is stripped, suffix match)
    pub exclude_files: Vec<String>,

    /// Extensions (with leading dot) of the files to enumerate
    pub extensions: Vec<String>,

    /// Files above this many bytes are not embedded in the consolidated output
    pub max_file_size: u64,

    /// Where the summary report is written
    pub report_file: PathBuf,

    /// Where the consolidated code is written
    pub consolidated_file: PathBuf,

    /// Optional JSON export of every file record
    pub records_file: Option<PathBuf>,

    /// Whether to follow symbolic links during directory traversal
    pub follow_links: bool,

    /// Whether to suppress non-essential output
    pub quiet: bool,

    /// Whether to show detailed progress and debug information
    pub verbose: bool,

    /// Whether to use colors in console output
    pub use_colors: bool,

    /// Whether to show a progress spinner while analysing files
    pub show_progress: bool,

    /// Whether to print the project tree at the end of a run
    pub show_tree: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scan_path: PathBuf::from("."),
            exclude_dirs: default_exclude_dirs(),
            exclude_files: default_exclude_files(),
            extensions: default_extensions(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            report_file: PathBuf::from(DEFAULT_REPORT_FILE),
            consolidated_file: PathBuf::from(DEFAULT_CONSOLIDATED_FILE),
            records_file: None,
            follow_links: false,
            quiet: false,
            verbose: false,
            use_colors: true,
            show_progress: true,
            show_tree: true,
        }
    }
}

impl Settings {
    /// Settings with defaults for everything but the scan root
    pub fn for_path(scan_path: impl Into<PathBuf>) -> Self {
        Self {
            scan_path: scan_path.into(),
            ..Default::default()
        }
    }

    /// Whether a directory name is pruned from traversal
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.exclude_dirs.iter().any(|dir| dir == name)
    }

    /// Whether a file name matches one of the excluded file patterns
    pub fn is_excluded_file(&self, name: &str) -> bool {
        self.exclude_files
            .iter()
            .any(|pattern| name.ends_with(&pattern.replace('*', "")))
    }

    /// Whether an extension (with leading dot) is enumerated
    pub fn includes_extension(&self, extension: &str) -> bool {
        self.extensions.iter().any(|ext| ext == extension)
    }
}

fn default_exclude_dirs() -> Vec<String> {
    ["__pycache__", ".git", ".venv", "venv", "node_modules", ".idea"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_exclude_files() -> Vec<String> {
    ["*.pyc", "*.pyo", ".DS_Store"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_extensions() -> Vec<String> {
    [".py", ".md", ".txt", ".yml", ".yaml", ".json"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialSettings {
    pub scan_path: Option<PathBuf>,
    pub exclude_dirs: Option<Vec<String>>,
    pub exclude_files: Option<Vec<String>>,
    pub extensions: Option<Vec<String>>,
    pub max_file_size: Option<u64>,
    pub report_file: Option<PathBuf>,
    pub consolidated_file: Option<PathBuf>,
    pub records_file: Option<PathBuf>,
    pub follow_links: Option<bool>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
    pub use_colors: Option<bool>,
    pub show_progress: Option<bool>,
    pub show_tree: Option<bool>,
}

impl PartialSettings {
    /// Merge another PartialSettings into this one
    /// Fields from `other` take precedence over existing fields
    pub fn merge_from(&mut self, other: PartialSettings) {
        if other.scan_path.is_some() {
            self.scan_path = other.scan_path;
        }
        if other.exclude_dirs.is_some() {
            self.exclude_dirs = other.exclude_dirs;
        }
        if other.exclude_files.is_some() {
            self.exclude_files = other.exclude_files;
        }
        if other.extensions.is_some() {
            self.extensions = other.extensions;
        }
        if other.max_file_size.is_some() {
            self.max_file_size = other.max_file_size;
        }
        if other.report_file.is_some() {
            self.report_file = other.report_file;
        }
        if other.consolidated_file.is_some() {
            self.consolidated_file = other.consolidated_file;
        }
        if other.records_file.is_some() {
            self.records_file = other.records_file;
        }
        if other.follow_links.is_some() {
            self.follow_links = other.follow_links;
        }
        if other.quiet.is_some() {
            self.quiet = other.quiet;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
        if other.use_colors.is_some() {
            self.use_colors = other.use_colors;
        }
        if other.show_progress.is_some() {
            self.show_progress = other.show_progress;
        }
        if other.show_tree.is_some() {
            self.show_tree = other.show_tree;
        }
    }

    /// Convert partial settings to full settings
    /// Uses defaults for any fields that are None
    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::default();

        if let Some(scan_path) = &self.scan_path {
            settings.scan_path = scan_path.clone();
        }
        if let Some(exclude_dirs) = &self.exclude_dirs {
            settings.exclude_dirs = exclude_dirs.clone();
        }
        if let Some(exclude_files) = &self.exclude_files {
            settings.exclude_files = exclude_files.clone();
        }
        if let Some(extensions) = &self.extensions {
            settings.extensions = extensions.clone();
        }
        if let Some(max_file_size) = self.max_file_size {
            settings.max_file_size = max_file_size;
        }
        if let Some(report_file) = &self.report_file {
            settings.report_file = report_file.clone();
        }
        if let Some(consolidated_file) = &self.consolidated_file {
            settings.consolidated_file = consolidated_file.clone();
        }
        if let Some(records_file) = &self.records_file {
            settings.records_file = Some(records_file.clone());
        }
        if let Some(follow_links) = self.follow_links {
            settings.follow_links = follow_links;
        }
        if let Some(quiet) = self.quiet {
            settings.quiet = quiet;
        }
        if let Some(verbose) = self.verbose {
            settings.verbose = verbose;
        }
        if let Some(use_colors) = self.use_colors {
            settings.use_colors = use_colors;
        }
        if let Some(show_progress) = self.show_progress {
            settings.show_progress = show_progress;
        }
        if let Some(show_tree) = self.show_tree {
            settings.show_tree = show_tree;
        }

        settings
    }
}
