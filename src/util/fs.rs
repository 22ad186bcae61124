//! Filesystem utilities.

use std::fs;
use std::io;
use std::path::Path;

/// Remove a directory and all its contents, ignoring every error.
///
/// Returns whether the directory was removed. A missing directory is the
/// common case and is not logged. Other failures (permissions, files in use)
/// are logged as warnings and otherwise dropped.
pub fn remove_dir_all_quietly(path: &Path) -> bool {
    match fs::remove_dir_all(path) {
        Ok(()) => {
            tracing::debug!("Removed {}", path.display());
            true
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => false,
        Err(e) => {
            tracing::warn!("failed to remove {}: {}", path.display(), e);
            false
        }
    }
}
