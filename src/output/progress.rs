//! Progress reporting functionality
//!
//! This module provides progress reporting for long-running operations
//! with support for quiet and verbose modes.

use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter for long-running operations
pub struct ProgressReporter {
    quiet: bool,
    verbose: bool,
    progress_bar: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Create a new progress reporter.
    ///
    /// No bar is drawn in quiet mode or when `show_progress` is off.
    pub fn new(quiet: bool, verbose: bool, show_progress: bool) -> Self {
        let progress_bar = if quiet || !show_progress {
            None
        } else {
            let bar = ProgressBar::new(0);
            if let Ok(style) = ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {wide_msg}",
            ) {
                bar.set_style(style.progress_chars("#>-"));
            }
            Some(bar)
        };

        Self {
            quiet,
            verbose,
            progress_bar,
        }
    }

    /// Start a new progress operation
    pub fn start(&self, total: usize, operation: &str) {
        if self.quiet {
            return;
        }

        if let Some(bar) = &self.progress_bar {
            bar.reset();
            bar.set_length(total as u64);
            bar.set_message(operation.to_string());
        }

        if self.verbose {
            println!("Starting: {}", operation);
        }
    }

    /// Update progress
    pub fn update(&self, current: usize, total: usize, message: &str) {
        if self.quiet {
            return;
        }

        if let Some(bar) = &self.progress_bar {
            bar.set_length(total as u64);
            bar.set_position(current as u64);
            bar.set_message(message.to_string());
        }

        if self.verbose {
            println!("[{}/{}] {}", current, total, message);
        }
    }

    /// Finish the progress operation and clear the bar
    pub fn finish(&self, message: &str) {
        if self.quiet {
            return;
        }

        if let Some(bar) = &self.progress_bar {
            bar.finish_and_clear();
        }

        if self.verbose {
            println!("Finished: {}", message);
        }
    }

    /// Print a message (respects quiet mode)
    pub fn print(&self, message: &str) {
        if !self.quiet {
            println!("{}", message);
        }
    }

    /// Print a verbose message (only in verbose mode)
    pub fn print_verbose(&self, message: &str) {
        if self.verbose {
            println!("{}", message);
        }
    }
}
