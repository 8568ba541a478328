//! Console printer for rendered tree lines

use std::io;
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

use crate::fs::EntryKind;
use crate::tree::RenderLine;

use super::config::OutputConfig;

/// Writes `RenderLine`s, coloring the label by entry kind.
pub struct TreePrinter<W: WriteColor> {
    out: W,
}

impl TreePrinter<StandardStream> {
    pub fn stdout(config: OutputConfig) -> Self {
        Self::new(StandardStream::stdout(config.color_choice()))
    }
}

impl<W: WriteColor> TreePrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn label_color(line: &RenderLine) -> Option<ColorSpec> {
        let mut spec = ColorSpec::new();
        match line.kind {
            EntryKind::Directory => {
                spec.set_fg(Some(Color::Blue)).set_bold(true);
            }
            EntryKind::Symlink => {
                spec.set_fg(Some(Color::Cyan));
            }
            EntryKind::File if line.executable => {
                spec.set_fg(Some(Color::Green));
            }
            EntryKind::File => return None,
        }
        Some(spec)
    }

    pub fn print_line(&mut self, line: &RenderLine) -> io::Result<()> {
        write!(self.out, "{}", line.connector_prefix)?;
        match Self::label_color(line) {
            Some(spec) => {
                self.out.set_color(&spec)?;
                write!(self.out, "{}", line.label)?;
                self.out.reset()?;
            }
            None => write!(self.out, "{}", line.label)?,
        }
        writeln!(self.out)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
