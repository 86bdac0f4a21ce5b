//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add a directory (and any missing parents).
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Add a symlink at `link` pointing to `target` (taken verbatim).
    #[cfg(unix)]
    pub fn add_symlink(&self, target: &str, link: &str) -> PathBuf {
        let link_path = self.dir.path().join(link);
        std::os::unix::fs::symlink(target, &link_path).expect("Failed to create symlink");
        link_path
    }

    /// Create a wide, nested tree: `breadth` directories per level, `files`
    /// files in each directory, `depth` levels deep.
    pub fn populate(&self, depth: usize, breadth: usize, files: usize) {
        fn fill(dir: &Path, depth: usize, breadth: usize, files: usize) {
            for f in 0..files {
                fs::write(dir.join(format!("file_{}.rs", f)), "").expect("Failed to write file");
            }
            if depth == 0 {
                return;
            }
            for d in 0..breadth {
                let sub = dir.join(format!("dir_{}", d));
                fs::create_dir(&sub).expect("Failed to create dir");
                fill(&sub, depth - 1, breadth, files);
            }
        }
        fill(self.dir.path(), depth, breadth, files);
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
