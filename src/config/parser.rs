//! Configuration file parsing utilities

use std::fs;
use std::path::{Path, PathBuf};

use super::file::DEFAULT_CONFIG_FILE;
use crate::error::{Result, ResultExt, UniterError};
use crate::models::config::PartialSettings;

/// Parse a TOML configuration file into PartialSettings
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(UniterError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| UniterError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_config_content(&content, path)
}

/// Parse TOML configuration content into PartialSettings
pub fn parse_config_content<P: AsRef<Path>>(content: &str, path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    let settings: PartialSettings =
        toml::from_str(content).map_err(|e| UniterError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    validate_partial_settings(&settings, path)?;

    Ok(settings)
}

/// Validate partial settings for obvious errors
pub fn validate_partial_settings<P: AsRef<Path>>(settings: &PartialSettings, path: P) -> Result<()> {
    let path = path.as_ref();
    let invalid = |what: &str| UniterError::Config {
        message: format!("{} in config file: {}", what, path.display()),
    };

    if let Some(scan_path) = &settings.scan_path {
        if scan_path.as_os_str().is_empty() {
            return Err(invalid("Invalid empty scan_path"));
        }
    }

    let name_lists = [
        ("exclude_dirs", &settings.exclude_dirs),
        ("exclude_files", &settings.exclude_files),
        ("extensions", &settings.extensions),
    ];
    for (field, values) in name_lists {
        if let Some(values) = values {
            if values.iter().any(|v| v.is_empty()) {
                return Err(invalid(&format!("Empty entry in {}", field)));
            }
        }
    }

    if let Some(extensions) = &settings.extensions {
        if let Some(ext) = extensions.iter().find(|ext| !ext.starts_with('.')) {
            return Err(invalid(&format!("Extension '{}' must start with '.'", ext)));
        }
    }

    let output_files = [
        ("report_file", &settings.report_file),
        ("consolidated_file", &settings.consolidated_file),
        ("records_file", &settings.records_file),
    ];
    for (field, value) in output_files {
        if let Some(value) = value {
            if value.as_os_str().is_empty() {
                return Err(invalid(&format!("Invalid empty {}", field)));
            }
        }
    }

    Ok(())
}

/// Locations searched for a config file, in order
pub fn default_config_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(DEFAULT_CONFIG_FILE)];

    if let Some(home_dir) = dirs::home_dir() {
        locations.push(home_dir.join(DEFAULT_CONFIG_FILE));
    }

    if let Some(config_dir) = dirs::config_dir() {
        locations.push(config_dir.join("uniter").join("config.toml"));
    }

    locations
}

/// Find and load configuration from default locations
pub fn find_default_config() -> Result<Option<PartialSettings>> {
    for location in default_config_locations() {
        if location.is_file() {
            tracing::debug!(path = %location.display(), "using default config file");
            return Ok(Some(parse_config_file(location)?));
        }
    }

    Ok(None)
}

/// Create a default configuration file at the specified path
pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    let default_config = include_str!("default_config.toml");

    fs::write(path, default_config).map_err(|e| UniterError::output_write_error(path, e))?;

    Ok(())
}
