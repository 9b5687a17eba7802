//! Markdown summary report
//!
//! The report opens with the generation timestamp and the aggregate counts,
//! embeds the rendered tree in a fenced block and then lists classes, the
//! first functions and the first imports. Sections without items are left
//! out entirely.

use crate::models::file_record::FileRecord;
use crate::models::summary::ProjectSummary;
use crate::models::tree::DirectoryTree;
use crate::output::tree::render_tree;
use chrono::NaiveDateTime;

/// Timestamp format used in every generated file
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Functions listed in the report
pub const MAX_REPORTED_FUNCTIONS: usize = 20;

/// Imports listed in the report
pub const MAX_REPORTED_IMPORTS: usize = 15;

/// Characters of a docstring kept in the report
pub const DOCSTRING_PREVIEW_CHARS: usize = 100;

/// Renders the summary report
#[derive(Debug, Clone)]
pub struct ReportGenerator {
    root_name: String,
}

impl ReportGenerator {
    /// `root_name` is printed as the top line of the structure block
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            root_name: root_name.into(),
        }
    }

    /// Render the report for a set of records and the project tree
    pub fn render(
        &self,
        records: &[FileRecord],
        tree: &DirectoryTree,
        generated_at: NaiveDateTime,
    ) -> String {
        let summary = ProjectSummary::from_records(records);
        let mut output = String::new();

        output.push_str("# Project Report\n");
        output.push_str(&format!(
            "Generated: {}\n\n",
            generated_at.format(TIMESTAMP_FORMAT)
        ));

        output.push_str("## Summary\n");
        output.push_str(&format!("- Total files: {}\n", summary.total_files));
        output.push_str(&format!("- Python files: {}\n", summary.analyzable_files));
        output.push_str(&format!("- Lines of code: {}\n", summary.total_lines));
        output.push_str(&format!("- Functions: {}\n", summary.function_count()));
        output.push_str(&format!("- Classes: {}\n", summary.class_count()));
        output.push_str(&format!(
            "- Unique imports: {}\n\n",
            summary.unique_import_count()
        ));

        output.push_str("## Project Structure\n");
        output.push_str("```\n");
        output.push_str(&format!("{}/\n", self.root_name));
        output.push_str(&render_tree(tree));
        output.push_str("```\n\n");

        self.push_classes(&summary, &mut output);
        self.push_functions(&summary, &mut output);
        self.push_imports(&summary, &mut output);

        output
    }

    fn push_classes(&self, summary: &ProjectSummary, output: &mut String) {
        let classes = summary.classes_by_name();
        if classes.is_empty() {
            return;
        }

        output.push_str("## Classes\n");
        for located in classes {
            let class = &located.class;
            output.push_str(&format!("- **{}** ({})\n", class.name, located.file));
            if let Some(preview) = docstring_preview(class.docstring.as_deref()) {
                output.push_str(&format!("  - {}\n", preview));
            }
            if !class.methods.is_empty() {
                output.push_str(&format!("  - Methods: {}\n", class.methods.join(", ")));
            }
        }
        output.push('\n');
    }

    fn push_functions(&self, summary: &ProjectSummary, output: &mut String) {
        let functions = summary.functions_by_name();
        if functions.is_empty() {
            return;
        }

        output.push_str("## Functions\n");
        for located in functions.into_iter().take(MAX_REPORTED_FUNCTIONS) {
            let function = &located.function;
            output.push_str(&format!("- **{}()** ({})\n", function.name, located.file));
            if let Some(preview) = docstring_preview(function.docstring.as_deref()) {
                output.push_str(&format!("  - {}\n", preview));
            }
            if !function.args.is_empty() {
                output.push_str(&format!("  - Arguments: {}\n", function.args.join(", ")));
            }
        }
        output.push('\n');
    }

    fn push_imports(&self, summary: &ProjectSummary, output: &mut String) {
        if summary.imports.is_empty() {
            return;
        }

        output.push_str("## Imports\n");
        for import in summary.imports.iter().take(MAX_REPORTED_IMPORTS) {
            output.push_str(&format!("- {}\n", import));
        }
        output.push('\n');
    }
}

/// First characters of a docstring followed by an ellipsis.
///
/// The ellipsis is appended even when nothing was cut.
fn docstring_preview(docstring: Option<&str>) -> Option<String> {
    let docstring = docstring.filter(|doc| !doc.is_empty())?;
    let head: String = docstring.chars().take(DOCSTRING_PREVIEW_CHARS).collect();
    Some(format!("{}...", head))
}
