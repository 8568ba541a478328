//! Formatting and display
//!
//! - `config` - Output configuration types
//! - `tree` - Colored console printer for tree lines
//! - `clean` - Colored console printer for cleaner events
//! - `json` - JSON lines output for both

mod clean;
mod config;
mod json;
mod tree;

pub use clean::{CleanPrinter, event_message};
pub use config::OutputConfig;
pub use json::JsonLines;
pub use tree::TreePrinter;
