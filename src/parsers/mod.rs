//! Parsing functionality for source files
//!
//! This module provides the Python analyzer used to extract structural
//! metadata, along with string literal and docstring helpers.

pub mod docstring;
pub mod python;

pub use python::PythonParser;
