//! Command implementations

use super::Args;
use crate::config::{self, CliArgs, DEFAULT_CONFIG_FILE};
use crate::core::ProjectCollector;
use crate::error::{ErrorSeverity, Result, UniterError};
use crate::models::config::Settings;
use crate::output::{render_tree_colored, OutputWriter, ProgressReporter, StdoutWriter};
use std::path::PathBuf;

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Summarize and consolidate the specified directory
    Collect(Args),
    /// Initialize a default configuration file
    Init,
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            return Command::Init;
        }

        Command::Collect(args)
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        match self {
            Command::Collect(args) => {
                let settings = config::load_config(CliArgs::from(args))?;
                if settings.verbose {
                    tracing::debug!(?settings, "resolved settings");
                }
                run_collect(settings)
            }
            Command::Init => {
                let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);

                if config_path.exists() {
                    println!("Configuration file already exists at: {}", config_path.display());
                    println!("To overwrite it, delete the file first and run this command again.");
                    return Ok(());
                }

                config::create_default_config(&config_path)?;

                println!("Created default configuration file at: {}", config_path.display());
                println!("\nEvery setting in it is commented out; uncomment a line to override its default.");
                Ok(())
            }
        }
    }

    /// Run the command and handle errors
    pub fn run(&self) -> i32 {
        match self.execute() {
            Ok(()) => 0,
            Err(err) => exit_code(&err),
        }
    }
}

/// Print a fatal error and map its severity to an exit code
fn exit_code(err: &UniterError) -> i32 {
    eprintln!("{}: {}", err.severity(), err.user_message());

    match err {
        UniterError::InvalidPath { .. } => {
            eprintln!("Suggestion: Check that the path exists and is a directory");
        }
        UniterError::ConfigNotFound { .. } => {
            eprintln!("Suggestion: Create one with `uniter --init` or point --config at an existing file");
        }
        UniterError::PermissionDenied { .. } => {
            eprintln!("Suggestion: Check the permissions of the directory or exclude it with --exclude-dir");
        }
        UniterError::OutputDirectoryNotFound { .. } => {
            eprintln!("Suggestion: Create the output directory first or specify a different path");
        }
        _ => {}
    }

    match err.severity() {
        ErrorSeverity::Error => 1,
        ErrorSeverity::Critical => 2,
    }
}

/// Report, consolidated code, optional records export, then the console tree
fn run_collect(settings: Settings) -> Result<()> {
    let reporter = ProgressReporter::new(settings.quiet, settings.verbose, settings.show_progress);
    let collector = ProjectCollector::new(settings);
    let settings = collector.settings();

    reporter.print("Generating report...");
    reporter.start(0, &format!("Scanning {}", settings.scan_path.display()));
    let records = collector.collect_files_with_progress(|current, total, message| {
        reporter.update(current, total, message)
    })?;
    reporter.finish(&format!("Collected {} files", records.len()));

    collector.write_summary_report(&records, &settings.report_file)?;
    reporter.print(&format!("Report saved to {}", settings.report_file.display()));

    reporter.print("Generating consolidated code...");
    collector.write_consolidated_code(&records, &settings.consolidated_file)?;
    reporter.print(&format!("Code saved to {}", settings.consolidated_file.display()));

    if let Some(records_file) = &settings.records_file {
        collector.export_records(&records, records_file)?;
        reporter.print(&format!("Records saved to {}", records_file.display()));
    }

    let failed = records
        .iter()
        .filter(|r| r.analysis.as_ref().is_some_and(|a| a.is_failed()))
        .count();
    if failed > 0 {
        reporter.print_verbose(&format!("{} file(s) could not be parsed", failed));
    }

    if settings.show_tree && !settings.quiet {
        let tree = collector.generate_tree_structure()?;
        let rendered = render_tree_colored(&tree, settings.use_colors);
        StdoutWriter.write(&format!(
            "\nProject structure:\n{}/\n{}",
            collector.root_name(),
            rendered
        ))?;
    }

    Ok(())
}
