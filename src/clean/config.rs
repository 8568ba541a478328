//! Configuration for the cleaner

use super::patterns::ArtifactKind;

/// Which files the cleaner removes and how it reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanConfig {
    /// Report deletions without performing them.
    pub pretend: bool,
    pub remove_twiddle: bool,
    /// Also `.swp` and `.swo`.
    pub remove_swp: bool,
    pub remove_dep: bool,
    pub remove_tag: bool,
    pub remove_pyc: bool,
    /// Announce every directory entered.
    pub verbose: bool,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            pretend: false,
            remove_twiddle: true,
            remove_swp: false,
            remove_dep: false,
            remove_tag: false,
            remove_pyc: false,
            verbose: false,
        }
    }
}

impl CleanConfig {
    /// Whether files of `kind` are enabled for removal.
    pub fn wants(&self, kind: ArtifactKind) -> bool {
        match kind {
            ArtifactKind::Twiddle => self.remove_twiddle,
            ArtifactKind::Swap => self.remove_swp,
            ArtifactKind::Depend => self.remove_dep,
            ArtifactKind::Tags => self.remove_tag,
            ArtifactKind::Pyc => self.remove_pyc,
        }
    }

    /// The enabled kinds, in banner order.
    pub fn targets(&self) -> Vec<ArtifactKind> {
        ArtifactKind::ALL
            .into_iter()
            .filter(|kind| self.wants(*kind))
            .collect()
    }

    /// Enable the `-all` group: swap files and `.depend`. Tags and `.pyc` stay off.
    pub fn enable_all(&mut self) {
        self.remove_swp = true;
        self.remove_dep = true;
    }
}
