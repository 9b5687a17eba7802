//! Per-file source analysis
//!
//! Wraps the Python parser and turns read or decode failures into a failed
//! [`Analysis`] so that a single broken file never aborts a run.

use crate::error::Result;
use crate::models::file_record::Analysis;
use crate::parsers::PythonParser;
use std::fs;
use std::path::Path;

/// Analyzer for Python source files
pub struct Analyzer {
    parser: PythonParser,
}

impl Analyzer {
    /// Create a new analyzer.
    ///
    /// Fails only when the grammar cannot be loaded into the parser.
    pub fn new() -> Result<Self> {
        Ok(Self {
            parser: PythonParser::new()?,
        })
    }

    /// Read and analyse the file at `path`
    pub fn analyze_file(&mut self, path: &Path) -> Analysis {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to read source file");
                return Analysis::failed(err.to_string());
            }
        };

        let source = match String::from_utf8(bytes) {
            Ok(source) => source,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "source file is not valid UTF-8");
                return Analysis::failed(format!("invalid UTF-8: {}", err.utf8_error()));
            }
        };

        let analysis = self.analyze_source(&source);
        match analysis.error_message() {
            Some(message) => {
                tracing::warn!(path = %path.display(), %message, "failed to parse source file")
            }
            None => tracing::debug!(
                path = %path.display(),
                functions = analysis.functions().len(),
                classes = analysis.classes().len(),
                "analysed source file"
            ),
        }
        analysis
    }

    /// Analyse source text that is already in memory
    pub fn analyze_source(&mut self, source: &str) -> Analysis {
        self.parser.analyze(source)
    }
}
