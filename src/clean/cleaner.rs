//! The cleaner walk

use std::io;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Error, Result};
use crate::fs::{EntryKind, Filesystem};

use super::config::CleanConfig;
use super::events::{CleanEvent, CleanOutput};
use super::patterns::{ArtifactKind, is_skipped_dir};

/// A root whose walk stopped on an unrecovered error.
#[derive(Debug)]
pub struct RootFailure {
    pub root: PathBuf,
    pub error: Error,
}

/// What a run over one or more roots did.
#[derive(Debug, Default)]
pub struct CleanReport {
    /// Every file identified for deletion, in traversal order. The same in
    /// pretend and real mode.
    pub matched: Vec<PathBuf>,
    /// Files actually unlinked.
    pub removed: Vec<PathBuf>,
    /// Files left in place because they were in use.
    pub busy: Vec<PathBuf>,
    pub config_errors: Vec<ConfigError>,
    pub failures: Vec<RootFailure>,
}

impl CleanReport {
    /// True unless some root aborted. Configuration errors and busy files
    /// are warnings only.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Depth-first, pre-order artifact remover.
pub struct Cleaner<F> {
    fs: F,
    config: CleanConfig,
}

fn emit<O: CleanOutput>(output: &mut O, event: CleanEvent) -> Result<()> {
    output.event(&event).map_err(Error::Output)
}

impl<F: Filesystem> Cleaner<F> {
    pub fn new(fs: F, config: CleanConfig) -> Self {
        Self { fs, config }
    }

    pub fn config(&self) -> &CleanConfig {
        &self.config
    }

    /// Clean every root in order.
    ///
    /// A bad root is reported and skipped, and a root that fails mid-walk is
    /// reported and abandoned; both leave the remaining roots to run. Only a
    /// failure to deliver events to `output` stops the whole run.
    pub fn clean<P: AsRef<Path>, O: CleanOutput>(
        &self,
        roots: &[P],
        output: &mut O,
    ) -> Result<CleanReport> {
        let mut report = CleanReport::default();

        for root in roots {
            let root = root.as_ref();
            match self.clean_root(root, output, &mut report) {
                Ok(()) => {}
                Err(Error::Configuration(err)) => {
                    let event = match &err {
                        ConfigError::MissingRoot(path) => CleanEvent::MissingRoot { path: path.clone() },
                        ConfigError::NotADirectory(path) => {
                            CleanEvent::NotADirectory { path: path.clone() }
                        }
                    };
                    emit(output, event)?;
                    report.config_errors.push(err);
                }
                Err(err @ Error::Output(_)) => return Err(err),
                Err(err) => {
                    emit(
                        output,
                        CleanEvent::Aborted {
                            root: root.to_path_buf(),
                            message: err.to_string(),
                        },
                    )?;
                    report.failures.push(RootFailure {
                        root: root.to_path_buf(),
                        error: err,
                    });
                }
            }
        }

        Ok(report)
    }

    /// Clean a single root, appending to `report`.
    pub fn clean_root<O: CleanOutput>(
        &self,
        root: &Path,
        output: &mut O,
        report: &mut CleanReport,
    ) -> Result<()> {
        self.check_root(root)?;
        self.clean_dir(root, output, report)
    }

    fn check_root(&self, root: &Path) -> Result<()> {
        match self.fs.stat(root) {
            Err(Error::NotFound { .. }) => Err(ConfigError::MissingRoot(root.to_path_buf()).into()),
            Err(err) => Err(err),
            // A root named on the command line may be a link to a directory.
            Ok(_) if self.fs.is_dir(root) => Ok(()),
            Ok(_) => Err(ConfigError::NotADirectory(root.to_path_buf()).into()),
        }
    }

    fn clean_dir<O: CleanOutput>(
        &self,
        dir: &Path,
        output: &mut O,
        report: &mut CleanReport,
    ) -> Result<()> {
        if self.config.verbose {
            emit(
                output,
                CleanEvent::EnteringDirectory {
                    path: dir.to_path_buf(),
                },
            )?;
        }

        for entry in self.fs.list_sorted(dir)? {
            match entry.kind {
                // never deleted, never followed
                EntryKind::Symlink => {}
                EntryKind::Directory => {
                    if !is_skipped_dir(&entry.name) {
                        self.clean_dir(&entry.path, output, report)?;
                    }
                }
                EntryKind::File => {
                    let wanted = ArtifactKind::of(&entry.name).filter(|kind| self.config.wants(*kind));
                    if let Some(kind) = wanted {
                        self.remove(&entry.path, kind, output, report)?;
                    }
                }
            }
        }

        Ok(())
    }

    fn remove<O: CleanOutput>(
        &self,
        path: &Path,
        kind: ArtifactKind,
        output: &mut O,
        report: &mut CleanReport,
    ) -> Result<()> {
        report.matched.push(path.to_path_buf());

        if self.config.pretend {
            return emit(
                output,
                CleanEvent::WouldDelete {
                    path: path.to_path_buf(),
                    kind,
                },
            );
        }

        emit(
            output,
            CleanEvent::Deleting {
                path: path.to_path_buf(),
                kind,
            },
        )?;

        match self.fs.remove_file(path) {
            Ok(()) => {
                report.removed.push(path.to_path_buf());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::ResourceBusy => {
                report.busy.push(path.to_path_buf());
                emit(
                    output,
                    CleanEvent::Busy {
                        path: path.to_path_buf(),
                    },
                )
            }
            Err(source) => Err(Error::Delete {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}
