//! Operating system backed filesystem

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

use super::entry::{EntryKind, Stat};
use super::paths::{absolute, normalize};
use super::Filesystem;

/// The real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(unix)]
fn has_exec_bit(meta: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn has_exec_bit(_meta: &fs::Metadata) -> bool {
    false
}

impl Filesystem for LocalFs {
    fn read_dir_names(&self, dir: &Path) -> Result<Vec<OsString>> {
        let entries = fs::read_dir(dir).map_err(|e| Error::from_io(dir, e))?;
        entries
            .map(|entry| {
                entry
                    .map(|e| e.file_name())
                    .map_err(|e| Error::from_io(dir, e))
            })
            .collect()
    }

    fn stat(&self, path: &Path) -> Result<Stat> {
        // symlink_metadata so a link is reported as a link, never as its target
        let meta = fs::symlink_metadata(path).map_err(|e| Error::from_io(path, e))?;
        let file_type = meta.file_type();
        let kind = if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        Ok(Stat {
            kind,
            executable: kind == EntryKind::File && has_exec_bit(&meta),
        })
    }

    fn real_path(&self, path: &Path) -> PathBuf {
        if let Ok(real) = fs::canonicalize(path) {
            return real;
        }

        // Dangling link: resolve the directory holding it and splice the link text on.
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let base = fs::canonicalize(parent).unwrap_or_else(|_| absolute(parent));
        match fs::read_link(path) {
            Ok(target) => normalize(&base.join(target)),
            Err(_) => match path.file_name() {
                Some(name) => base.join(name),
                None => absolute(path),
            },
        }
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }
}
