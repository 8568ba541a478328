//! Test utilities for building real directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub use crate::fs::MemoryFs;

/// A temporary directory tree for testing.
///
/// The directory is removed when dropped. Paths given to the `add_*`
/// methods are relative to the tree root.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
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

    /// Add a file with mode 0755.
    #[cfg(unix)]
    pub fn add_executable(&self, path: &str, content: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let full_path = self.add_file(path, content);
        fs::set_permissions(&full_path, fs::Permissions::from_mode(0o755))
            .expect("Failed to set permissions");
        full_path
    }

    /// Add an empty directory.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Add a symlink at `path` whose text is `target`, verbatim.
    #[cfg(unix)]
    pub fn add_symlink(&self, path: &str, target: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::os::unix::fs::symlink(target, &full_path).expect("Failed to create symlink");
        full_path
    }

    /// Whether `path` exists, without following a final symlink.
    pub fn exists(&self, path: &str) -> bool {
        fs::symlink_metadata(self.dir.path().join(path)).is_ok()
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
