//! Scan effect — walk directory trees, collect playable files.
//!
//! Directory listing order is kept as-is; the shuffle makes it irrelevant.
//! Symlinked directories are never entered, so the walk cannot cycle.

use std::fs;
use std::path::Path;

use crate::error::ScanError;
use crate::models::{ExtensionSet, PathCollection};
use crate::paths;

const MAX_SCAN_DEPTH: usize = 256;

/// Walks roots and appends every playable file to a collection.
pub struct TreeScanner<'a> {
    extensions: &'a ExtensionSet,
    recurse: bool,
}

impl<'a> TreeScanner<'a> {
    pub fn new(extensions: &'a ExtensionSet, recurse: bool) -> Self {
        Self { extensions, recurse }
    }

    /// Scan one root. Returns the number of paths appended.
    ///
    /// An unreadable root is reported as [`ScanError::Unreadable`]; the caller
    /// decides whether to carry on with other roots. Unreadable directories
    /// below the root are logged and skipped. Only a failed append aborts.
    pub fn walk(&self, root: &Path, into: &mut PathCollection) -> Result<usize, ScanError> {
        let entries = fs::read_dir(root).map_err(|source| ScanError::Unreadable {
            path: root.to_path_buf(),
            source,
        })?;
        self.walk_entries(root, entries, 0, into)
    }

    fn walk_dir(&self, dir: &Path, depth: usize, into: &mut PathCollection) -> Result<usize, ScanError> {
        if depth > MAX_SCAN_DEPTH {
            log::warn!("playrandom: scan depth limit reached at {}", dir.display());
            return Ok(0);
        }
        match fs::read_dir(dir) {
            Ok(entries) => self.walk_entries(dir, entries, depth, into),
            Err(e) => {
                log::warn!("playrandom: skipping unreadable directory {}: {}", dir.display(), e);
                Ok(0)
            }
        }
    }

    fn walk_entries(
        &self,
        dir: &Path,
        entries: fs::ReadDir,
        depth: usize,
        into: &mut PathCollection,
    ) -> Result<usize, ScanError> {
        let mut count = 0;

        // read_dir never yields `.` or `..`.
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::debug!("playrandom: bad entry in {}: {}", dir.display(), e);
                    continue;
                }
            };

            let name = entry.file_name();
            let Some(full) = paths::join_bounded(dir, &name) else {
                log::warn!(
                    "playrandom: path too long (> {} bytes), skipping {:?} in {}",
                    paths::MAX_PATH_LEN,
                    name,
                    dir.display()
                );
                continue;
            };

            // Uses the listing's type hint where the platform has one,
            // otherwise an lstat; symlinks are not followed here.
            let file_type = match entry.file_type() {
                Ok(t) => t,
                Err(e) => {
                    log::debug!("playrandom: can't stat {}: {}", full.display(), e);
                    continue;
                }
            };

            if file_type.is_dir() {
                if self.recurse {
                    count += self.walk_dir(&full, depth + 1, into)?;
                }
                continue;
            }

            if file_type.is_symlink() && fs::metadata(&full).map(|m| m.is_dir()).unwrap_or(false) {
                log::debug!("playrandom: not following directory symlink {}", full.display());
                continue;
            }

            if self.extensions.matches(&full) {
                into.append(&full)?;
                count += 1;
            }
        }

        Ok(count)
    }
}
