//! Single-file concatenation of the analysed sources

use crate::models::config::ANALYZABLE_EXTENSION;
use crate::models::file_record::FileRecord;
use crate::output::report::TIMESTAMP_FORMAT;
use chrono::NaiveDateTime;
use std::fs;
use std::path::Path;

const SEPARATOR_WIDTH: usize = 50;

/// Concatenates analysable files into one document with per-file banners
#[derive(Debug, Clone)]
pub struct Consolidator {
    max_file_size: u64,
}

impl Consolidator {
    /// Files strictly larger than `max_file_size` bytes are not embedded
    pub fn new(max_file_size: u64) -> Self {
        Self { max_file_size }
    }

    /// Render the consolidated document.
    ///
    /// Record paths are resolved against `root` when the content is read.
    /// A file that cannot be read gets an error banner instead of content.
    pub fn render(&self, root: &Path, records: &[FileRecord], generated_at: NaiveDateTime) -> String {
        let sources: Vec<&FileRecord> = records
            .iter()
            .filter(|r| r.extension == ANALYZABLE_EXTENSION)
            .collect();

        let mut output = String::new();
        output.push_str("\"\"\"\n");
        output.push_str("=== CONSOLIDATED PROJECT CODE ===\n");
        output.push_str(&format!("Date: {}\n", generated_at.format(TIMESTAMP_FORMAT)));
        output.push_str(&format!("Files: {}\n", sources.len()));
        output.push_str("\"\"\"\n\n");

        for record in sources {
            self.push_file(root, record, &mut output);
        }

        output
    }

    fn push_file(&self, root: &Path, record: &FileRecord, output: &mut String) {
        let path = record.display_path();

        if record.size > self.max_file_size {
            output.push_str(&format!(
                "# === {} === [FILE TOO LARGE: {} bytes]\n\n",
                path, record.size
            ));
            return;
        }

        let content = match fs::read_to_string(root.join(&record.path)) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!(path = %path, error = %err, "failed to read file for consolidation");
                output.push_str(&format!("# === {} === [READ ERROR: {}]\n\n", path, err));
                return;
            }
        };

        let separator = format!("# {}\n", "=".repeat(SEPARATOR_WIDTH));
        output.push_str(&separator);
        output.push_str(&format!("# FILE: {}\n", path));
        output.push_str(&format!("# SIZE: {} bytes\n", record.size));

        let functions: Vec<&str> = record.functions().iter().map(|f| f.name.as_str()).collect();
        if !functions.is_empty() {
            output.push_str(&format!("# FUNCTIONS: {}\n", functions.join(", ")));
        }
        let classes: Vec<&str> = record.classes().iter().map(|c| c.name.as_str()).collect();
        if !classes.is_empty() {
            output.push_str(&format!("# CLASSES: {}\n", classes.join(", ")));
        }

        output.push_str(&separator);
        output.push('\n');
        output.push_str(&content);
        output.push_str("\n\n");
    }
}
