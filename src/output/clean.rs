//! Console printer for cleaner events

use std::io;
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

use crate::clean::{CleanConfig, CleanEvent, CleanOutput};

use super::config::OutputConfig;

/// Prints each `CleanEvent` as a line as soon as it arrives. Warnings are yellow.
pub struct CleanPrinter<W: WriteColor> {
    out: W,
}

impl CleanPrinter<StandardStream> {
    pub fn stdout(config: OutputConfig) -> Self {
        Self::new(StandardStream::stdout(config.color_choice()))
    }
}

impl<W: WriteColor> CleanPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// The lines printed before any walking starts.
    pub fn banner(&mut self, config: &CleanConfig) -> io::Result<()> {
        if config.pretend {
            writeln!(self.out, "Just pretending")?;
        }
        let targets: Vec<&str> = config.targets().into_iter().map(|k| k.describe()).collect();
        if targets.is_empty() {
            writeln!(self.out, "Looking for nothing")
        } else {
            writeln!(self.out, "Looking for {}", targets.join(", "))
        }
    }
}

/// The text of one event, without color.
pub fn event_message(event: &CleanEvent) -> String {
    match event {
        CleanEvent::EnteringDirectory { path } => format!("Processing {}", path.display()),
        CleanEvent::Deleting { path, .. } => format!("  Deleting {}", path.display()),
        CleanEvent::WouldDelete { path, .. } => format!("  'Deleting' {}", path.display()),
        CleanEvent::Busy { .. } => "  ...which is in use (EBUSY), so not deleting it".to_string(),
        CleanEvent::MissingRoot { path } => {
            format!("!!! Directory '{}' does not exist", path.display())
        }
        CleanEvent::NotADirectory { path } => {
            format!("!!! '{}' is not a directory", path.display())
        }
        CleanEvent::Aborted { root, message } => {
            format!("!!! Stopped cleaning '{}': {}", root.display(), message)
        }
    }
}

impl<W: WriteColor> CleanOutput for CleanPrinter<W> {
    fn event(&mut self, event: &CleanEvent) -> io::Result<()> {
        let message = event_message(event);
        if event.is_warning() {
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
            write!(self.out, "{}", message)?;
            self.out.reset()?;
            writeln!(self.out)
        } else {
            writeln!(self.out, "{}", message)
        }
    }
}
