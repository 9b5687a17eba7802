//! Directory walking functionality
//!
//! Enumerates the files under the scan root whose extension is configured,
//! pruning excluded directories, and analyses the Python files among them.
//! Within each directory files are visited before subdirectories and both
//! groups are ordered by name, so every run over the same tree yields the
//! same record order.

use crate::core::analyzer::Analyzer;
use crate::error::{Result, ResultExt, UniterError};
use crate::models::config::{Settings, ANALYZABLE_EXTENSION};
use crate::models::file_record::FileRecord;
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Main walker for directory traversal and analysis
pub struct Walker {
    settings: Settings,
}

impl Walker {
    /// Create a new walker with the given settings
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Get the current settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Enumerate and analyse every matching file under the scan root
    pub fn collect_files(&self) -> Result<Vec<FileRecord>> {
        self.collect_files_with_progress(|_, _, _| {})
    }

    /// Enumerate and analyse with progress reporting
    pub fn collect_files_with_progress<F>(&self, progress_fn: F) -> Result<Vec<FileRecord>>
    where
        F: Fn(usize, usize, &str),
    {
        progress_fn(
            0,
            0,
            &format!("Scanning directory: {}", self.settings.scan_path.display()),
        );

        let paths = self.find_files()?;
        let total = paths.len();
        progress_fn(0, total, &format!("Found {} files", total));

        let mut analyzer = Analyzer::new()?;
        let mut records = Vec::with_capacity(total);

        for (i, path) in paths.iter().enumerate() {
            let relative = path
                .strip_prefix(&self.settings.scan_path)
                .unwrap_or(path)
                .to_path_buf();
            progress_fn(i, total, &format!("Analyzing: {}", relative.display()));

            let size = fs::metadata(path).with_file_context(path)?.len();
            let extension = extension_of(path);
            let analysis = (extension == ANALYZABLE_EXTENSION).then(|| analyzer.analyze_file(path));

            records.push(FileRecord {
                path: relative,
                size,
                extension,
                analysis,
            });
        }

        progress_fn(total, total, "Analysis complete");
        tracing::debug!(files = records.len(), "file enumeration finished");

        Ok(records)
    }

    /// Find the paths of all files with a configured extension, in traversal order
    pub fn find_files(&self) -> Result<Vec<PathBuf>> {
        let root = &self.settings.scan_path;
        if !root.is_dir() {
            return Err(UniterError::InvalidPath { path: root.clone() });
        }

        let walker = WalkDir::new(root)
            .follow_links(self.settings.follow_links)
            .sort_by(files_first)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !self.is_excluded_dir(entry));

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry?;
            if !is_file(&entry) {
                continue;
            }

            let extension = extension_of(entry.path());
            if self.settings.includes_extension(&extension) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    fn is_excluded_dir(&self, entry: &DirEntry) -> bool {
        entry.file_type().is_dir()
            && self
                .settings
                .is_excluded_dir(&entry.file_name().to_string_lossy())
    }
}

/// Files before directories, then by name
pub(crate) fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Regular files, and symbolic links that resolve to one
fn is_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

/// Final extension with its leading dot, empty when there is none
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}
