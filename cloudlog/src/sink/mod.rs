//! Destinations for encoded log lines.
//!
//! A [`Sink`] receives one fully encoded line per emitted record, on one of
//! three channels mirroring the console's log/warn/error streams. Sinks do no
//! filtering or formatting of their own.
//!
//! - **`console`**: stdout for the normal channel, stderr for the others
//! - **`memory`**: keeps lines in memory, in order

mod console;
mod memory;

use std::{io, sync::Arc};

pub use console::ConsoleSink;
pub use memory::MemorySink;

use crate::severity::Channel;

/// Channel-discriminated destination for log lines.
pub trait Sink: Send + Sync {
    fn write_normal(&self, line: &str) -> io::Result<()>;

    fn write_warning(&self, line: &str) -> io::Result<()>;

    fn write_error(&self, line: &str) -> io::Result<()>;

    /// Writes `line` to the given channel.
    fn write(&self, channel: Channel, line: &str) -> io::Result<()> {
        match channel {
            Channel::Normal => self.write_normal(line),
            Channel::Warning => self.write_warning(line),
            Channel::Error => self.write_error(line),
        }
    }
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn write_normal(&self, line: &str) -> io::Result<()> {
        (**self).write_normal(line)
    }

    fn write_warning(&self, line: &str) -> io::Result<()> {
        (**self).write_warning(line)
    }

    fn write_error(&self, line: &str) -> io::Result<()> {
        (**self).write_error(line)
    }
}

impl<S: Sink + ?Sized> Sink for &S {
    fn write_normal(&self, line: &str) -> io::Result<()> {
        (**self).write_normal(line)
    }

    fn write_warning(&self, line: &str) -> io::Result<()> {
        (**self).write_warning(line)
    }

    fn write_error(&self, line: &str) -> io::Result<()> {
        (**self).write_error(line)
    }
}
