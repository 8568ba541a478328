//! Entry labels

use crate::fs::{DirectoryEntry, EntryKind};

/// The text shown for an entry, with its type marker.
///
/// - symlink: `name@ -> target`, plus `/` when the target is a directory
/// - directory: `name/`, plus `...` when folded
/// - executable file: `name*`
/// - anything else: `name`
pub fn label(entry: &DirectoryEntry, folded: bool) -> String {
    match entry.kind {
        EntryKind::Symlink => {
            let mut text = format!("{}@", entry.name);
            if let Some(link) = &entry.link {
                text.push_str(" -> ");
                text.push_str(&link.relative_target);
                if link.target_is_directory {
                    text.push('/');
                }
            }
            text
        }
        EntryKind::Directory if folded => format!("{}/...", entry.name),
        EntryKind::Directory => format!("{}/", entry.name),
        EntryKind::File if entry.executable => format!("{}*", entry.name),
        EntryKind::File => entry.name.clone(),
    }
}
