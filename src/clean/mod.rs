//! Editor backup and build leftover removal
//!
//! `Cleaner` walks each root depth-first in name order and removes files
//! whose names match an enabled `ArtifactKind`. Symlinks are never touched
//! and version-control directories are never entered. Progress is reported
//! as `CleanEvent`s through a `CleanOutput` sink.

mod cleaner;
mod config;
mod events;
mod patterns;

pub use cleaner::{CleanReport, Cleaner, RootFailure};
pub use config::CleanConfig;
pub use events::{CleanEvent, CleanOutput};
pub use patterns::{ArtifactKind, SKIP_DIRS, is_skipped_dir};
