//! Command-line argument parsing

use clap::Parser;
use std::path::PathBuf;

/// Uniter - Python project summarizer and source consolidator
#[derive(Parser, Debug)]
#[command(name = "uniter")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Summarize a Python project and consolidate its sources into one file")]
#[command(long_about = "Uniter walks a project directory, extracts imports, functions, classes and docstrings \
from its Python files, and writes a Markdown summary report together with a single file that \
concatenates every source file under descriptive banners.")]
#[command(after_help = "EXAMPLES:

Basic Usage:
    # Summarize the current directory
    uniter

    # Summarize a specific directory
    uniter --path ./my-project

    # Skip additional directories (can be repeated)
    uniter --exclude-dir build --exclude-dir dist

Output Options:
    # Write the outputs somewhere else
    uniter --report-file docs/summary.md --consolidated-file /tmp/all_code.py

    # Also export every file record as JSON
    uniter --records-file records.json

    # Embed files up to 200 KB in the consolidated code
    uniter --max-file-size 200000

Configuration:
    # Use a specific configuration file
    uniter --config ./uniter.toml

    # Create a default configuration file
    uniter --init
")]
pub struct Args {
    /// Target directory to scan
    #[arg(short, long, value_name = "PATH", help = "Directory to summarize (defaults to the current directory)")]
    pub path: Option<PathBuf>,

    /// Directory names to skip
    #[arg(short = 'e', long, value_name = "NAME", help = "Directory name to skip entirely (replaces the default list, can be specified multiple times)")]
    pub exclude_dir: Vec<String>,

    /// File name patterns hidden from the tree
    #[arg(long, value_name = "PATTERN", help = "File name pattern hidden from the project tree, e.g. '*.pyc' (replaces the default list, can be specified multiple times)")]
    pub exclude_file: Vec<String>,

    /// Extensions of the files to collect
    #[arg(long, value_name = "EXT", help = "Extension of the files to collect, with leading dot, e.g. '.py' (replaces the default list, can be specified multiple times)")]
    pub ext: Vec<String>,

    /// Largest file embedded in the consolidated code
    #[arg(long, value_name = "BYTES", help = "Files above this size in bytes are not embedded in the consolidated code (default: 50000)")]
    pub max_file_size: Option<u64>,

    /// Report output file
    #[arg(long, value_name = "FILE", help = "Where to write the summary report (default: project_summary.md)")]
    pub report_file: Option<PathBuf>,

    /// Consolidated code output file
    #[arg(long, value_name = "FILE", help = "Where to write the consolidated code (default: consolidated_code.py)")]
    pub consolidated_file: Option<PathBuf>,

    /// JSON export of the file records
    #[arg(long, value_name = "FILE", help = "Also write every collected file record as JSON to this file")]
    pub records_file: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to configuration file (defaults to .uniter.toml in the current or home directory)")]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long, help = "Suppress progress messages and the project tree")]
    pub quiet: bool,

    /// Show detailed progress and debug information
    #[arg(short, long, help = "Show per-file progress and debug logging")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, help = "Disable colored output in the console tree")]
    pub no_colors: bool,

    /// Disable progress bars
    #[arg(long, help = "Disable the progress bar (useful for CI environments or when redirecting output)")]
    pub no_progress: bool,

    /// Do not print the project tree
    #[arg(long, help = "Do not print the project tree at the end of the run")]
    pub no_tree: bool,

    /// Follow symbolic links during directory traversal
    #[arg(long, help = "Follow symbolic links during directory traversal (may visit files twice if links form cycles)")]
    pub follow_links: bool,

    /// Initialize a default configuration file
    #[arg(long, help = "Create a default configuration file (.uniter.toml) in the current directory")]
    pub init: bool,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
