//! Project-wide aggregates over the enumerated files

use super::config::ANALYZABLE_EXTENSION;
use super::file_record::{ClassInfo, FileRecord, FunctionInfo};
use serde::Serialize;
use std::collections::BTreeSet;

/// A function together with the file it was found in
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocatedFunction {
    pub file: String,
    pub function: FunctionInfo,
}

/// A class together with the file it was found in
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocatedClass {
    pub file: String,
    pub class: ClassInfo,
}

/// Aggregated statistics for one run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectSummary {
    /// Files of any enumerated extension
    pub total_files: usize,
    /// Files with the analyzable extension
    pub analyzable_files: usize,
    /// Sum of line counts over successfully analysed files
    pub total_lines: usize,
    /// Files whose analysis failed
    pub failed_files: usize,
    pub functions: Vec<LocatedFunction>,
    pub classes: Vec<LocatedClass>,
    pub imports: BTreeSet<String>,
}

impl ProjectSummary {
    /// Aggregate over a set of file records
    pub fn from_records(records: &[FileRecord]) -> Self {
        let mut summary = ProjectSummary {
            total_files: records.len(),
            ..Default::default()
        };

        for record in records
            .iter()
            .filter(|r| r.extension == ANALYZABLE_EXTENSION)
        {
            summary.update_with_record(record);
        }

        summary
    }

    /// Fold one analyzable file into the aggregates
    fn update_with_record(&mut self, record: &FileRecord) {
        self.analyzable_files += 1;

        let Some(analysis) = &record.analysis else {
            return;
        };

        if analysis.is_failed() {
            self.failed_files += 1;
        }

        self.total_lines += analysis.lines();

        let file = record.display_path();
        self.functions.extend(analysis.functions().iter().map(|f| LocatedFunction {
            file: file.clone(),
            function: f.clone(),
        }));
        self.classes.extend(analysis.classes().iter().map(|c| LocatedClass {
            file: file.clone(),
            class: c.clone(),
        }));
        self.imports.extend(analysis.imports().iter().cloned());
    }

    /// Classes ordered by name, ties kept in discovery order
    pub fn classes_by_name(&self) -> Vec<&LocatedClass> {
        let mut classes: Vec<&LocatedClass> = self.classes.iter().collect();
        classes.sort_by(|a, b| a.class.name.cmp(&b.class.name));
        classes
    }

    /// Functions ordered by name, ties kept in discovery order
    pub fn functions_by_name(&self) -> Vec<&LocatedFunction> {
        let mut functions: Vec<&LocatedFunction> = self.functions.iter().collect();
        functions.sort_by(|a, b| a.function.name.cmp(&b.function.name));
        functions
    }

    pub fn function_count(&self) -> usize {
        self.functions.len()
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    pub fn unique_import_count(&self) -> usize {
        self.imports.len()
    }
}
