//! DirectoryWalker - lists one directory in partitioned order

use std::path::Path;

use tracing::{debug, warn};

use super::config::{StatErrorPolicy, WalkerConfig};
use super::entry::{Entry, FileId};
use super::error::WalkError;

/// Lists directories as directories-first, then files, keeping the order
/// the filesystem returned within each group.
///
/// No tree is materialized: every renderer drives its own walk through
/// [`DirectoryWalker::traverse`], which calls [`DirectoryWalker::walk`] once
/// per directory it descends into.
#[derive(Debug, Clone, Default)]
pub struct DirectoryWalker {
    config: WalkerConfig,
}

impl DirectoryWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// List the children of `path` in partitioned order.
    ///
    /// A path that does not exist yields an empty list rather than an error.
    /// Listing is not re-sorted; only the directory/file partition is applied.
    pub fn walk(&self, path: &Path) -> Result<Vec<Entry>, WalkError> {
        if !path.exists() {
            debug!(path = %path.display(), "path does not exist, nothing to walk");
            return Ok(Vec::new());
        }

        let listing = std::fs::read_dir(path).map_err(|source| WalkError::ReadDir {
            path: path.to_path_buf(),
            source,
        })?;

        let mut dirs = Vec::new();
        let mut files = Vec::new();

        for item in listing {
            let item = match item {
                Ok(item) => item,
                Err(source) => match self.config.on_stat_error {
                    StatErrorPolicy::Abort => {
                        return Err(WalkError::ReadDir {
                            path: path.to_path_buf(),
                            source,
                        });
                    }
                    StatErrorPolicy::Skip => {
                        warn!(path = %path.display(), error = %source, "skipping unreadable directory entry");
                        continue;
                    }
                },
            };

            let name = item.file_name().to_string_lossy().into_owned();
            let full_path = item.path();

            // Follows symlinks: a link to a directory is listed as a directory.
            let meta = match std::fs::metadata(&full_path) {
                Ok(meta) => meta,
                Err(source) => match self.config.on_stat_error {
                    StatErrorPolicy::Abort => {
                        return Err(WalkError::Stat {
                            path: full_path,
                            source,
                        });
                    }
                    StatErrorPolicy::Skip => {
                        warn!(path = %full_path.display(), error = %source, "skipping entry that cannot be classified");
                        continue;
                    }
                },
            };

            let is_dir = meta.is_dir();
            let entry = Entry {
                name,
                path: full_path,
                is_dir,
                id: if is_dir { FileId::of(&meta) } else { None },
            };

            if is_dir {
                dirs.push(entry);
            } else {
                files.push(entry);
            }
        }

        debug!(
            path = %path.display(),
            dirs = dirs.len(),
            files = files.len(),
            "listed directory"
        );

        dirs.append(&mut files);
        Ok(dirs)
    }
}
