//! Settings validation

use crate::error::{Result, UniterError};
use crate::models::config::Settings;
use std::path::Path;

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid
    pub fn validate(settings: &Settings) -> Result<()> {
        if !settings.scan_path.is_dir() {
            return Err(UniterError::InvalidPath {
                path: settings.scan_path.clone(),
            });
        }

        if let Some(ext) = settings.extensions.iter().find(|ext| !ext.starts_with('.')) {
            return Err(UniterError::config_error(format!(
                "Extension '{}' must start with '.'",
                ext
            )));
        }

        if settings
            .exclude_dirs
            .iter()
            .chain(&settings.exclude_files)
            .any(|entry| entry.is_empty())
        {
            return Err(UniterError::config_error("Exclusion entries must not be empty"));
        }

        Self::validate_output_path(&settings.report_file)?;
        Self::validate_output_path(&settings.consolidated_file)?;
        if let Some(path) = &settings.records_file {
            Self::validate_output_path(path)?;
        }

        Ok(())
    }

    /// Validate that the directory an output file goes into exists
    fn validate_output_path(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                return Err(UniterError::OutputDirectoryNotFound {
                    path: parent.to_path_buf(),
                });
            }
        }

        Ok(())
    }
}
