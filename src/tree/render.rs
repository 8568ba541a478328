//! Render - lazy depth-first tree listing

use std::fmt;
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};
use std::vec;

use serde::Serialize;

use crate::error::{ConfigError, Error, Result};
use crate::fs::{DirectoryEntry, EntryKind, Filesystem};

use super::annotate::label;
use super::config::TreeConfig;

/// One line of tree output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderLine {
    /// 0 for the root.
    pub depth: usize,
    /// Ancestor continuations followed by this entry's connector. Empty for the root.
    pub connector_prefix: String,
    pub label: String,
    pub name: String,
    pub kind: EntryKind,
    pub executable: bool,
}

impl fmt::Display for RenderLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.connector_prefix, self.label)
    }
}

/// Sorted children of one directory still waiting to be emitted.
struct Frame {
    entries: vec::IntoIter<DirectoryEntry>,
    padding: String,
    depth: usize,
}

/// A directory whose line has been emitted but whose listing has not been read yet.
struct Pending {
    path: PathBuf,
    padding: String,
    depth: usize,
}

/// Iterator over the lines of a tree, in depth-first pre-order.
///
/// Directories are listed only when the walk reaches them, so the memory
/// held is the open listings along the current path. A listing failure is
/// yielded once as an `Err`, after which the iterator is exhausted.
pub struct Render<'a, F: Filesystem + ?Sized> {
    fs: &'a F,
    config: &'a TreeConfig,
    root_line: Option<RenderLine>,
    pending: Option<Pending>,
    stack: Vec<Frame>,
    done: bool,
}

/// Start rendering the tree under `root`.
///
/// The root must exist and be a directory, or a symlink to one. Otherwise a
/// configuration error is returned before any line is produced.
pub fn render<'a, F: Filesystem + ?Sized>(
    fs: &'a F,
    root: &Path,
    config: &'a TreeConfig,
) -> Result<Render<'a, F>> {
    let entry = match fs.inspect(root) {
        Ok(entry) => entry,
        Err(Error::NotFound { .. }) => {
            return Err(ConfigError::MissingRoot(root.to_path_buf()).into());
        }
        Err(err) => return Err(err),
    };
    if !fs.is_dir(root) {
        return Err(ConfigError::NotADirectory(root.to_path_buf()).into());
    }

    let root_line = RenderLine {
        depth: 0,
        connector_prefix: String::new(),
        label: label(&entry, false),
        name: entry.name,
        kind: entry.kind,
        executable: entry.executable,
    };

    Ok(Render {
        fs,
        config,
        root_line: Some(root_line),
        pending: Some(Pending {
            path: root.to_path_buf(),
            padding: String::new(),
            depth: 1,
        }),
        stack: Vec::new(),
        done: false,
    })
}

impl<F: Filesystem + ?Sized> Render<'_, F> {
    fn fail(&mut self, err: Error) -> Option<Result<RenderLine>> {
        self.done = true;
        self.pending = None;
        self.stack.clear();
        Some(Err(err))
    }
}

impl<F: Filesystem + ?Sized> Iterator for Render<'_, F> {
    type Item = Result<RenderLine>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if let Some(line) = self.root_line.take() {
            return Some(Ok(line));
        }

        if let Some(pending) = self.pending.take() {
            match self.fs.list_sorted(&pending.path) {
                Ok(entries) => self.stack.push(Frame {
                    entries: entries.into_iter(),
                    padding: pending.padding,
                    depth: pending.depth,
                }),
                Err(err) => return self.fail(err),
            }
        }

        let connectors = self.config.connectors();
        loop {
            let Some(frame) = self.stack.last_mut() else {
                self.done = true;
                return None;
            };
            let Some(entry) = frame.entries.next() else {
                self.stack.pop();
                continue;
            };

            let is_last = frame.entries.len() == 0;
            let folded = entry.kind == EntryKind::Directory && self.config.is_folded(&entry.name);
            let line = RenderLine {
                depth: frame.depth,
                connector_prefix: format!("{}{}", frame.padding, connectors.connector(is_last)),
                label: label(&entry, folded),
                name: entry.name.clone(),
                kind: entry.kind,
                executable: entry.executable,
            };

            if entry.kind == EntryKind::Directory && !folded {
                self.pending = Some(Pending {
                    path: entry.path,
                    padding: format!("{}{}", frame.padding, connectors.continuation(is_last)),
                    depth: frame.depth + 1,
                });
            }

            return Some(Ok(line));
        }
    }
}

impl<F: Filesystem + ?Sized> FusedIterator for Render<'_, F> {}
