//! TOML configuration file source

use std::path::{Path, PathBuf};

use super::{parser, ConfigSource};
use crate::error::{Result, UniterError};
use crate::models::config::PartialSettings;

/// File name looked up in the working and home directories
pub const DEFAULT_CONFIG_FILE: &str = ".uniter.toml";

/// A `.uniter.toml`-style file layered between the defaults and the command line
#[derive(Debug, Clone)]
pub struct FileConfig {
    path: PathBuf,
    label: String,
}

impl FileConfig {
    /// Source backed by an explicit path, typically from `--config`
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let label = format!("config file ({})", path.display());
        Self { path, label }
    }

    /// First existing file among the default locations
    pub fn discover() -> Option<Self> {
        parser::default_config_locations()
            .into_iter()
            .find(|location| location.is_file())
            .map(Self::with_path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for FileConfig {
    fn load(&self) -> Result<PartialSettings> {
        if !self.is_available() {
            return Err(UniterError::ConfigNotFound {
                path: self.path.clone(),
            });
        }

        parser::parse_config_file(&self.path)
    }

    fn is_available(&self) -> bool {
        self.path.is_file()
    }

    fn name(&self) -> &str {
        &self.label
    }

    fn priority(&self) -> u8 {
        20
    }
}
