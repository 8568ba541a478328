//! In-memory filesystem for tests and benchmarks.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsString;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

use super::entry::{EntryKind, Stat};
use super::Filesystem;

const MAX_LINK_HOPS: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    File { executable: bool },
    Dir,
    Symlink(PathBuf),
}

/// A tree of absolute paths held in memory.
///
/// Parents are created on demand. Deletions can be made to fail with a busy
/// error or a hard error, and listings can be denied, so the walkers' error
/// paths can be driven without special filesystems.
#[derive(Debug)]
pub struct MemoryFs {
    nodes: RefCell<BTreeMap<PathBuf, Node>>,
    busy: BTreeSet<PathBuf>,
    failing: BTreeSet<PathBuf>,
    unlistable: BTreeSet<PathBuf>,
}

impl MemoryFs {
    pub fn new() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert(PathBuf::from("/"), Node::Dir);
        Self {
            nodes: RefCell::new(nodes),
            busy: BTreeSet::new(),
            failing: BTreeSet::new(),
            unlistable: BTreeSet::new(),
        }
    }

    fn insert(&mut self, path: &Path, node: Node) {
        let nodes = self.nodes.get_mut();
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            nodes.entry(ancestor.to_path_buf()).or_insert(Node::Dir);
        }
        nodes.insert(path.to_path_buf(), node);
    }

    pub fn add_dir(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.insert(path.as_ref(), Node::Dir);
        self
    }

    pub fn add_file(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.insert(path.as_ref(), Node::File { executable: false });
        self
    }

    pub fn add_executable(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.insert(path.as_ref(), Node::File { executable: true });
        self
    }

    /// `target` is stored as given; relative targets resolve from the link's directory.
    pub fn add_symlink(&mut self, path: impl AsRef<Path>, target: impl AsRef<Path>) -> &mut Self {
        self.insert(path.as_ref(), Node::Symlink(target.as_ref().to_path_buf()));
        self
    }

    /// Removing `path` will fail with `ResourceBusy`.
    pub fn mark_busy(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.busy.insert(path.as_ref().to_path_buf());
        self
    }

    /// Removing `path` will fail with `PermissionDenied`.
    pub fn fail_removal(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.failing.insert(path.as_ref().to_path_buf());
        self
    }

    /// Listing `path` will fail with `PermissionDenied`.
    pub fn deny_listing(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.unlistable.insert(path.as_ref().to_path_buf());
        self
    }

    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        self.nodes.borrow().contains_key(path.as_ref())
    }

    /// Every file (not directory or link) currently present, sorted.
    pub fn files(&self) -> Vec<PathBuf> {
        self.nodes
            .borrow()
            .iter()
            .filter(|(_, node)| matches!(node, Node::File { .. }))
            .map(|(path, _)| path.clone())
            .collect()
    }

    /// Resolve the parent of `path` but not `path` itself, like lstat does.
    fn locate(&self, path: &Path) -> PathBuf {
        match (path.parent(), path.file_name()) {
            (Some(parent), Some(name)) => self.real_path(parent).join(name),
            _ => self.real_path(path),
        }
    }

    fn resolve(&self, path: &Path, hops: usize) -> PathBuf {
        let nodes = self.nodes.borrow();
        let mut resolved = PathBuf::from("/");
        for component in path.components() {
            match component {
                Component::RootDir | Component::Prefix(_) | Component::CurDir => {}
                Component::ParentDir => {
                    resolved.pop();
                }
                Component::Normal(name) => {
                    let candidate = resolved.join(name);
                    match nodes.get(&candidate) {
                        Some(Node::Symlink(target)) if hops < MAX_LINK_HOPS => {
                            let next = resolved.join(target);
                            resolved = self.resolve(&next, hops + 1);
                        }
                        _ => resolved = candidate,
                    }
                }
            }
        }
        resolved
    }
}

impl Default for MemoryFs {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFs {
    fn read_dir_names(&self, dir: &Path) -> Result<Vec<OsString>> {
        if self.unlistable.contains(dir) {
            return Err(Error::from_io(
                dir,
                io::Error::from(io::ErrorKind::PermissionDenied),
            ));
        }
        let real = self.real_path(dir);
        let nodes = self.nodes.borrow();
        match nodes.get(&real) {
            Some(Node::Dir) => {}
            Some(_) => {
                return Err(Error::from_io(
                    dir,
                    io::Error::from(io::ErrorKind::NotADirectory),
                ));
            }
            None => return Err(Error::NotFound { path: dir.to_path_buf() }),
        }
        Ok(nodes
            .keys()
            .filter(|path| path.parent() == Some(real.as_path()))
            .filter_map(|path| path.file_name().map(|name| name.to_os_string()))
            .collect())
    }

    fn stat(&self, path: &Path) -> Result<Stat> {
        let located = self.locate(path);
        match self.nodes.borrow().get(&located) {
            Some(Node::File { executable }) => Ok(Stat {
                kind: EntryKind::File,
                executable: *executable,
            }),
            Some(Node::Dir) => Ok(Stat {
                kind: EntryKind::Directory,
                executable: false,
            }),
            Some(Node::Symlink(_)) => Ok(Stat {
                kind: EntryKind::Symlink,
                executable: false,
            }),
            None => Err(Error::NotFound {
                path: path.to_path_buf(),
            }),
        }
    }

    fn real_path(&self, path: &Path) -> PathBuf {
        self.resolve(path, 0)
    }

    fn is_dir(&self, path: &Path) -> bool {
        let real = self.real_path(path);
        matches!(self.nodes.borrow().get(&real), Some(Node::Dir))
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        let located = self.locate(path);
        if self.busy.contains(&located) {
            return Err(io::Error::from(io::ErrorKind::ResourceBusy));
        }
        if self.failing.contains(&located) {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        let mut nodes = self.nodes.borrow_mut();
        match nodes.get(&located) {
            Some(Node::Dir) => Err(io::Error::from(io::ErrorKind::IsADirectory)),
            Some(_) => {
                nodes.remove(&located);
                Ok(())
            }
            None => Err(io::Error::from(io::ErrorKind::NotFound)),
        }
    }
}
