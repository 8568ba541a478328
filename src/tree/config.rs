//! Configuration types for the tree renderer

use std::collections::BTreeSet;

/// Characters used to draw the branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectorSet {
    /// In front of a child that has later siblings.
    pub tee: &'static str,
    /// In front of the last child.
    pub corner: &'static str,
    /// Carried below a non-last child, for its descendants.
    pub vertical: &'static str,
    /// Carried below the last child.
    pub blank: &'static str,
}

impl ConnectorSet {
    pub const BOX: Self = Self {
        tee: "├─",
        corner: "└─",
        vertical: "│ ",
        blank: "  ",
    };

    /// Same shapes as `tree --charset=ASCII`.
    pub const ASCII: Self = Self {
        tee: "|- ",
        corner: "`- ",
        vertical: "|  ",
        blank: "   ",
    };

    pub fn connector(&self, is_last: bool) -> &'static str {
        if is_last { self.corner } else { self.tee }
    }

    pub fn continuation(&self, is_last: bool) -> &'static str {
        if is_last { self.blank } else { self.vertical }
    }
}

/// Configuration for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeConfig {
    /// Directory names listed but never expanded.
    pub folded: BTreeSet<String>,
    pub ascii: bool,
}

impl TreeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fold(mut self, name: impl Into<String>) -> Self {
        self.folded.insert(name.into());
        self
    }

    pub fn with_ascii(mut self, ascii: bool) -> Self {
        self.ascii = ascii;
        self
    }

    pub fn is_folded(&self, name: &str) -> bool {
        self.folded.contains(name)
    }

    pub fn connectors(&self) -> ConnectorSet {
        if self.ascii {
            ConnectorSet::ASCII
        } else {
            ConnectorSet::BOX
        }
    }
}
