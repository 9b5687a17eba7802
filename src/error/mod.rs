//! Error handling for the Uniter application
//!
//! This module provides the crate error type, its severity classification,
//! the result alias and error context utilities.

pub mod context;
pub mod types;

pub use context::ResultExt;
pub use types::{ErrorSeverity, Result, UniterError};
