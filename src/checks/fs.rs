//! File existence and directory emptiness.
//!
//! Unlike the other checks these return a plain `bool`: callers use them
//! as conditional gates, and every I/O error simply means "no".

use std::fs;
use std::path::Path;

/// Whether `path` can be read as a file.
///
/// Not-found, permission-denied and is-a-directory are all `false`.
pub fn file_exists(path: &Path) -> bool {
    fs::read(path).is_ok()
}

/// Whether `path` is a directory that can be listed and has no entries.
///
/// A non-empty directory and any listing error (including a path that
/// does not exist) are `false`.
pub fn is_empty_dir(path: &Path) -> bool {
    match fs::read_dir(path) {
        Ok(mut entries) => entries.next().is_none(),
        Err(e) => {
            tracing::debug!("Could not list {}: {}", path.display(), e);
            false
        }
    }
}
