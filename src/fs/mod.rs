//! Filesystem walker primitives
//!
//! Both tools see the filesystem only through the [`Filesystem`] trait:
//!
//! - `LocalFs` talks to the operating system
//! - `MemoryFs` is an in-memory tree for tests (`test-utils` feature)
//!
//! Listing is always sorted by raw name bytes, and classification never
//! follows symlinks, so a link to a directory is a `Symlink` and is never
//! walked into.

mod entry;
mod local;
#[cfg(any(test, feature = "test-utils"))]
mod memory;
mod paths;

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Result;

pub use entry::{DirectoryEntry, EntryKind, LinkTarget, Stat};
pub use local::LocalFs;
#[cfg(any(test, feature = "test-utils"))]
pub use memory::MemoryFs;
pub use paths::{absolute, normalize, relative_path};

/// The filesystem operations the walkers consume.
///
/// Implementors provide the raw primitives; listing, classification and
/// symlink description are derived from them.
pub trait Filesystem {
    /// Names of the immediate children of `dir`, in no particular order.
    fn read_dir_names(&self, dir: &Path) -> Result<Vec<OsString>>;

    /// Stat `path` without following a final symlink.
    fn stat(&self, path: &Path) -> Result<Stat>;

    /// Fully resolve `path`. Dangling links resolve as far as possible.
    fn real_path(&self, path: &Path) -> PathBuf;

    /// Whether `path` is a directory, following symlinks.
    fn is_dir(&self, path: &Path) -> bool;

    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// `Symlink` first, then `Directory`, else `File`.
    fn classify(&self, path: &Path) -> Result<EntryKind> {
        Ok(self.stat(path)?.kind)
    }

    /// Describe `link` as seen from `containing_dir`.
    fn link_target(&self, link: &Path, containing_dir: &Path) -> LinkTarget {
        let target = self.real_path(link);
        let base = self.real_path(containing_dir);
        LinkTarget {
            target_is_directory: self.is_dir(&target),
            relative_target: relative_path(&target, &base)
                .to_string_lossy()
                .into_owned(),
        }
    }

    /// Build the entry for a single path.
    fn inspect(&self, path: &Path) -> Result<DirectoryEntry> {
        let stat = self.stat(path)?;
        // the filesystem root has no name of its own, so it labels as plain `/`
        let name = match path.file_name() {
            Some(name) => name.to_string_lossy().to_string(),
            None if path.has_root() => String::new(),
            None => path.display().to_string(),
        };
        let link = if stat.kind == EntryKind::Symlink {
            let parent = match path.parent() {
                Some(p) if !p.as_os_str().is_empty() => p,
                _ => Path::new("."),
            };
            Some(self.link_target(path, parent))
        } else {
            None
        };
        Ok(DirectoryEntry {
            name,
            path: path.to_path_buf(),
            kind: stat.kind,
            executable: stat.kind == EntryKind::File && stat.executable,
            link,
        })
    }

    /// Immediate children of `dir`, sorted ascending by name.
    fn list_sorted(&self, dir: &Path) -> Result<Vec<DirectoryEntry>> {
        let mut names = self.read_dir_names(dir)?;
        names.sort();
        names
            .iter()
            .map(|name| self.inspect(&dir.join(name)))
            .collect()
    }
}

impl<F: Filesystem + ?Sized> Filesystem for &F {
    fn read_dir_names(&self, dir: &Path) -> Result<Vec<OsString>> {
        (**self).read_dir_names(dir)
    }

    fn stat(&self, path: &Path) -> Result<Stat> {
        (**self).stat(path)
    }

    fn real_path(&self, path: &Path) -> PathBuf {
        (**self).real_path(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        (**self).remove_file(path)
    }
}
