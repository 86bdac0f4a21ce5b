//! Entries produced by a directory walk

use std::fs::Metadata;
use std::path::{Path, PathBuf};

/// Filesystem identity of a directory, used to detect symlink cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileId {
    dev: u64,
    ino: u64,
}

impl FileId {
    #[cfg(unix)]
    pub fn of(meta: &Metadata) -> Option<Self> {
        use std::os::unix::fs::MetadataExt;
        Some(Self {
            dev: meta.dev(),
            ino: meta.ino(),
        })
    }

    #[cfg(not(unix))]
    pub fn of(_meta: &Metadata) -> Option<Self> {
        None
    }

    /// Identity of the directory at `path`, following symlinks.
    pub fn of_path(path: &Path) -> Option<Self> {
        std::fs::metadata(path).ok().and_then(|m| Self::of(&m))
    }
}

/// One child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub id: Option<FileId>,
}

/// Where an entry sits in the walk, handed to renderers alongside the entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position<'a> {
    /// 0 for the direct children of the walk root.
    pub depth: usize,
    /// Last entry of its directory in partitioned order.
    pub is_last: bool,
    /// Basename of the containing directory, `None` at the walk root.
    pub parent: Option<&'a str>,
}
