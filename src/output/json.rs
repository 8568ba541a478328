//! JSON lines output

use std::io::{self, Write};

use serde::Serialize;

use crate::clean::{CleanEvent, CleanOutput};

/// Writes one compact JSON object per line.
pub struct JsonLines<W: Write> {
    out: W,
}

impl JsonLines<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonLines<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn write<T: Serialize>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, value).map_err(io::Error::other)?;
        writeln!(self.out)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CleanOutput for JsonLines<W> {
    fn event(&mut self, event: &CleanEvent) -> io::Result<()> {
        self.write(event)
    }
}
