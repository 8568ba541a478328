//! Directory tree rendering
//!
//! `render` produces a lazy `Render` iterator of `RenderLine`s: the root
//! first, then every entry in depth-first pre-order, sorted by name within
//! each directory. Folded directories are listed with a `...` marker but
//! never expanded, and symlinks are never followed.

mod annotate;
mod config;
mod render;

pub use annotate::label;
pub use config::{ConnectorSet, TreeConfig};
pub use render::{Render, RenderLine, render};
