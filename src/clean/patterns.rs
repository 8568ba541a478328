//! Artifact name matching

use serde::Serialize;

/// Directory names the cleaner never descends into.
pub const SKIP_DIRS: &[&str] = &[".bzr", ".svn", ".git", ".hg", ".tox"];

/// The kinds of leftover files the cleaner knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// Editor backup, `name~`
    Twiddle,
    /// Vim swap file, `.swp` or `.swo`
    Swap,
    /// `.depend`
    Depend,
    /// ctags output, `tags`
    Tags,
    /// Compiled Python, `.pyc`
    Pyc,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 5] = [
        ArtifactKind::Twiddle,
        ArtifactKind::Swap,
        ArtifactKind::Depend,
        ArtifactKind::Tags,
        ArtifactKind::Pyc,
    ];

    /// Match a file name against the known patterns.
    ///
    /// The patterns are disjoint, so at most one kind applies to a name.
    pub fn of(name: &str) -> Option<Self> {
        if name.ends_with('~') {
            Some(Self::Twiddle)
        } else if name.ends_with(".swp") || name.ends_with(".swo") {
            Some(Self::Swap)
        } else if name == ".depend" {
            Some(Self::Depend)
        } else if name == "tags" {
            Some(Self::Tags)
        } else if name.ends_with(".pyc") {
            Some(Self::Pyc)
        } else {
            None
        }
    }

    /// How the kind is announced in the "Looking for" banner.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Twiddle => "~ files",
            Self::Swap => ".swp files",
            Self::Depend => ".depend files",
            Self::Tags => "tags files",
            Self::Pyc => ".pyc files",
        }
    }
}

/// Whether the cleaner should stay out of a directory with this name.
pub fn is_skipped_dir(name: &str) -> bool {
    SKIP_DIRS.contains(&name)
}
