//! Structured progress events emitted by the cleaner

use std::io;
use std::path::PathBuf;

use serde::Serialize;

use super::patterns::ArtifactKind;

/// Something the cleaner did or decided, in traversal order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CleanEvent {
    /// Only emitted in verbose mode.
    EnteringDirectory { path: PathBuf },
    /// Emitted just before the file is unlinked.
    Deleting { path: PathBuf, kind: ArtifactKind },
    /// Pretend mode: the file would have been deleted.
    WouldDelete { path: PathBuf, kind: ArtifactKind },
    /// The file was in use and was left in place.
    Busy { path: PathBuf },
    MissingRoot { path: PathBuf },
    NotADirectory { path: PathBuf },
    /// The walk of `root` stopped on an unrecovered error.
    Aborted { root: PathBuf, message: String },
}

impl CleanEvent {
    /// Warnings are the events that did not go as planned.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            Self::Busy { .. }
                | Self::MissingRoot { .. }
                | Self::NotADirectory { .. }
                | Self::Aborted { .. }
        )
    }
}

/// Receives cleaner events as they happen.
pub trait CleanOutput {
    fn event(&mut self, event: &CleanEvent) -> io::Result<()>;
}

/// Collects events, mostly for tests.
impl CleanOutput for Vec<CleanEvent> {
    fn event(&mut self, event: &CleanEvent) -> io::Result<()> {
        self.push(event.clone());
        Ok(())
    }
}
