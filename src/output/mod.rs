//! Output rendering and writing functionality

mod consolidated;
mod progress;
mod report;
mod tree;
mod writers;

pub use self::consolidated::Consolidator;
pub use self::progress::ProgressReporter;
pub use self::report::{
    ReportGenerator, DOCSTRING_PREVIEW_CHARS, MAX_REPORTED_FUNCTIONS, MAX_REPORTED_IMPORTS,
    TIMESTAMP_FORMAT,
};
pub use self::tree::{render_tree, render_tree_colored};
pub use self::writers::{FileWriter, OutputWriter, StdoutWriter};

use crate::error::Result;
use crate::models::file_record::FileRecord;

/// JSON formatter for machine-readable export of file records
pub struct JsonFormatter {
    pub pretty: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Serialize the records as a JSON array
    pub fn format(&self, records: &[FileRecord]) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(records)?
        } else {
            serde_json::to_string(records)?
        };
        Ok(json)
    }
}
