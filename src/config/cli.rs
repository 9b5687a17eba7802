//! Command-line argument configuration source

use std::path::PathBuf;

use super::ConfigSource;
use crate::cli::args::Args;
use crate::error::Result;
use crate::models::config::PartialSettings;

/// Command-line argument configuration source
#[derive(Debug)]
pub struct CliConfig {
    args: CliArgs,
    name: String,
    priority: u8,
}

/// Command-line arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub path: Option<PathBuf>,
    pub exclude_dirs: Option<Vec<String>>,
    pub exclude_files: Option<Vec<String>>,
    pub extensions: Option<Vec<String>>,
    pub max_file_size: Option<u64>,
    pub report_file: Option<PathBuf>,
    pub consolidated_file: Option<PathBuf>,
    pub records_file: Option<PathBuf>,
    pub quiet: bool,
    pub verbose: bool,
    pub follow_links: bool,
    pub no_colors: bool,
    pub no_progress: bool,
    pub no_tree: bool,
    pub config: Option<PathBuf>,
}

impl From<&Args> for CliArgs {
    fn from(args: &Args) -> Self {
        let non_empty = |values: &Vec<String>| (!values.is_empty()).then(|| values.clone());

        Self {
            path: args.path.clone(),
            exclude_dirs: non_empty(&args.exclude_dir),
            exclude_files: non_empty(&args.exclude_file),
            extensions: non_empty(&args.ext),
            max_file_size: args.max_file_size,
            report_file: args.report_file.clone(),
            consolidated_file: args.consolidated_file.clone(),
            records_file: args.records_file.clone(),
            quiet: args.quiet,
            verbose: args.verbose,
            follow_links: args.follow_links,
            no_colors: args.no_colors,
            no_progress: args.no_progress,
            no_tree: args.no_tree,
            config: args.config.clone(),
        }
    }
}

impl CliConfig {
    /// Create a new CLI configuration source
    pub fn new(args: CliArgs) -> Self {
        Self {
            args,
            name: "command-line arguments".to_string(),
            priority: 30,
        }
    }

    /// Create a CLI configuration source from Args
    pub fn from_args(args: &Args) -> Self {
        Self::new(CliArgs::from(args))
    }

    /// Get the config file path if specified
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.args.config.as_ref()
    }
}

impl ConfigSource for CliConfig {
    fn load(&self) -> Result<PartialSettings> {
        let args = &self.args;
        let mut settings = PartialSettings {
            scan_path: args.path.clone(),
            exclude_dirs: args.exclude_dirs.clone(),
            exclude_files: args.exclude_files.clone(),
            extensions: args.extensions.clone(),
            max_file_size: args.max_file_size,
            report_file: args.report_file.clone(),
            consolidated_file: args.consolidated_file.clone(),
            records_file: args.records_file.clone(),
            ..Default::default()
        };

        // Flags only override when set
        if args.quiet {
            settings.quiet = Some(true);
        }
        if args.verbose {
            settings.verbose = Some(true);
        }
        if args.follow_links {
            settings.follow_links = Some(true);
        }
        if args.no_colors {
            settings.use_colors = Some(false);
        }
        if args.no_progress {
            settings.show_progress = Some(false);
        }
        if args.no_tree {
            settings.show_tree = Some(false);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
