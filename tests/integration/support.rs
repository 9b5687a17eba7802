//! Shared fixtures for permission-sensitive tests

use std::fs;
use std::io;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// A directory stripped of every permission bit, restored on drop
pub struct LockedDir {
    path: PathBuf,
}

impl LockedDir {
    /// Lock `path`; `None` when the current user can still list it (root)
    pub fn lock(path: &Path) -> io::Result<Option<Self>> {
        fs::set_permissions(path, fs::Permissions::from_mode(0o000))?;
        let guard = LockedDir {
            path: path.to_path_buf(),
        };

        if fs::read_dir(path).is_ok() {
            return Ok(None);
        }
        Ok(Some(guard))
    }
}

impl Drop for LockedDir {
    fn drop(&mut self) {
        let _ = fs::set_permissions(&self.path, fs::Permissions::from_mode(0o755));
    }
}
