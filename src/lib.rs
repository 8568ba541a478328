//! dirsweep - remove editor leftovers from a tree, and draw the tree
//!
//! Two independent walkers share one filesystem layer:
//!
//! - [`clean`]: deletes `~` backups and optionally swap files, `.depend`,
//!   `tags` and `.pyc`, never touching symlinks or VCS directories
//! - [`tree`]: renders a connector-decorated listing with type markers and
//!   folded directories

pub mod clean;
pub mod cli;
pub mod error;
pub mod fs;
pub mod output;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
pub mod tree;

pub use clean::{ArtifactKind, CleanConfig, CleanEvent, CleanOutput, CleanReport, Cleaner};
pub use error::{ConfigError, Error, Result};
pub use fs::{DirectoryEntry, EntryKind, Filesystem, LinkTarget, LocalFs};
pub use output::{CleanPrinter, JsonLines, OutputConfig, TreePrinter};
pub use tree::{Render, RenderLine, TreeConfig, render};
