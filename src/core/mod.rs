//! Core functionality for directory walking and project collection

pub mod analyzer;
pub mod collector;
pub mod tree_builder;
pub mod walker;

pub use analyzer::Analyzer;
pub use collector::ProjectCollector;
pub use tree_builder::TreeBuilder;
pub use walker::Walker;
