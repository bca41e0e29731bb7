use std::io::{self, Write};

use super::Sink;

/// Writes normal lines to stdout, warnings and errors to stderr.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn write_line(mut out: impl Write, line: &str) -> io::Result<()> {
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

impl Sink for ConsoleSink {
    fn write_normal(&self, line: &str) -> io::Result<()> {
        write_line(io::stdout().lock(), line)
    }

    fn write_warning(&self, line: &str) -> io::Result<()> {
        write_line(io::stderr().lock(), line)
    }

    fn write_error(&self, line: &str) -> io::Result<()> {
        write_line(io::stderr().lock(), line)
    }
}
