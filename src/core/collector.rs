//! End-to-end project collection
//!
//! `ProjectCollector` drives the pipeline steps: enumeration and analysis,
//! tree building, the summary report and the consolidated code. Each step
//! is usable on its own; the `write_*` variants reuse records that were
//! already collected.

use crate::core::tree_builder::TreeBuilder;
use crate::core::walker::Walker;
use crate::error::Result;
use crate::models::config::Settings;
use crate::models::file_record::FileRecord;
use crate::models::tree::DirectoryTree;
use crate::output::{
    render_tree, Consolidator, FileWriter, JsonFormatter, OutputWriter, ReportGenerator,
};
use chrono::{Local, NaiveDateTime};
use std::path::Path;

/// Collects a project's files and produces the generated documents
pub struct ProjectCollector {
    settings: Settings,
}

impl ProjectCollector {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Collector for `root` with default settings
    pub fn for_path(root: impl AsRef<Path>) -> Self {
        Self::new(Settings::for_path(root.as_ref()))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Enumerate and analyse the project's files
    pub fn collect_files(&self) -> Result<Vec<FileRecord>> {
        Walker::new(self.settings.clone()).collect_files()
    }

    /// Enumerate and analyse, reporting progress as `(current, total, message)`
    pub fn collect_files_with_progress<F>(&self, progress_fn: F) -> Result<Vec<FileRecord>>
    where
        F: Fn(usize, usize, &str),
    {
        Walker::new(self.settings.clone()).collect_files_with_progress(progress_fn)
    }

    /// Build the directory tree of the scan root
    pub fn generate_tree_structure(&self) -> Result<DirectoryTree> {
        TreeBuilder::new(&self.settings).build()
    }

    /// Render a tree as plain ASCII text
    pub fn render_tree(&self, tree: &DirectoryTree) -> String {
        render_tree(tree)
    }

    /// Collect, render the report, write it to `output_file` and return it
    pub fn generate_summary_report(&self, output_file: &Path) -> Result<String> {
        let records = self.collect_files()?;
        self.write_summary_report(&records, output_file)
    }

    /// Render the report for already collected records and write it
    pub fn write_summary_report(&self, records: &[FileRecord], output_file: &Path) -> Result<String> {
        let report = self.render_summary_report(records, now())?;
        FileWriter::new(output_file).write(&report)?;
        tracing::debug!(path = %output_file.display(), bytes = report.len(), "wrote summary report");
        Ok(report)
    }

    /// Render the report without writing it.
    ///
    /// The directory tree is rebuilt from the file system on every call.
    pub fn render_summary_report(
        &self,
        records: &[FileRecord],
        generated_at: NaiveDateTime,
    ) -> Result<String> {
        let tree = self.generate_tree_structure()?;
        let generator = ReportGenerator::new(self.root_name());
        Ok(generator.render(records, &tree, generated_at))
    }

    /// Collect, render the consolidated code, write it to `output_file` and return it
    pub fn create_consolidated_code(&self, output_file: &Path) -> Result<String> {
        let records = self.collect_files()?;
        self.write_consolidated_code(&records, output_file)
    }

    /// Render the consolidated code for already collected records and write it
    pub fn write_consolidated_code(
        &self,
        records: &[FileRecord],
        output_file: &Path,
    ) -> Result<String> {
        let code = self.render_consolidated_code(records, now());
        FileWriter::new(output_file).write(&code)?;
        tracing::debug!(path = %output_file.display(), bytes = code.len(), "wrote consolidated code");
        Ok(code)
    }

    /// Render the consolidated code without writing it
    pub fn render_consolidated_code(
        &self,
        records: &[FileRecord],
        generated_at: NaiveDateTime,
    ) -> String {
        Consolidator::new(self.settings.max_file_size).render(
            &self.settings.scan_path,
            records,
            generated_at,
        )
    }

    /// Write the records as pretty JSON
    pub fn export_records(&self, records: &[FileRecord], output_file: &Path) -> Result<String> {
        let json = JsonFormatter::new(true).format(records)?;
        FileWriter::new(output_file).write(&json)?;
        Ok(json)
    }

    /// Name shown at the top of the structure block.
    ///
    /// Uses the final component of the canonical root so that `.` shows the
    /// actual directory name.
    pub fn root_name(&self) -> String {
        let root = &self.settings.scan_path;
        root.canonicalize()
            .ok()
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .unwrap_or_else(|| root.display().to_string())
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
