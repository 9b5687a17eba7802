//! Directory tree construction
//!
//! Builds the project structure independently of file enumeration: every
//! file is listed regardless of extension unless its name matches an
//! excluded file pattern, and excluded directories are left out entirely.

use crate::core::walker::files_first;
use crate::error::{Result, UniterError};
use crate::models::config::Settings;
use crate::models::tree::DirectoryTree;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Builds a [`DirectoryTree`] for the configured scan root
pub struct TreeBuilder<'a> {
    settings: &'a Settings,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Walk the scan root and build its tree.
    ///
    /// Any entry that cannot be read aborts the build.
    pub fn build(&self) -> Result<DirectoryTree> {
        let root = &self.settings.scan_path;
        if !root.is_dir() {
            return Err(UniterError::InvalidPath { path: root.clone() });
        }

        let walker = WalkDir::new(root)
            .follow_links(self.settings.follow_links)
            .min_depth(1)
            .sort_by(files_first)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !self.is_excluded_dir(entry));

        let mut tree = DirectoryTree::new();
        for entry in walker {
            let entry = entry?;
            let Ok(relative) = entry.path().strip_prefix(root) else {
                continue;
            };
            let parents = parent_components(relative);
            let name = entry.file_name().to_string_lossy().into_owned();

            if entry.file_type().is_dir() {
                tree.directory_at(parents.iter().map(String::as_str))
                    .directory_mut(&name);
            } else if entry.path_is_symlink() && entry.path().is_dir() {
                // Linked directories only appear when links are followed
                continue;
            } else if !self.settings.is_excluded_file(&name) {
                tree.directory_at(parents.iter().map(String::as_str))
                    .insert_file(name);
            }
        }

        Ok(tree)
    }

    fn is_excluded_dir(&self, entry: &DirEntry) -> bool {
        entry.file_type().is_dir()
            && self
                .settings
                .is_excluded_dir(&entry.file_name().to_string_lossy())
    }
}

fn parent_components(relative: &Path) -> Vec<String> {
    relative
        .parent()
        .map(|parent| {
            parent
                .components()
                .map(|part| part.as_os_str().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default()
}
