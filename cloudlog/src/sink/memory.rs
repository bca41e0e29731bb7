use std::{
    io,
    sync::{Mutex, MutexGuard},
};

use super::Sink;
use crate::severity::Channel;

/// Keeps every written line, with its channel, in write order.
///
/// Useful for capturing output in tests or for handing records to code that
/// ships them elsewhere.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<(Channel, String)>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> MutexGuard<'_, Vec<(Channel, String)>> {
        // A poisoned lock still holds complete lines.
        self.lines
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Returns a copy of all lines written so far.
    #[must_use]
    pub fn lines(&self) -> Vec<(Channel, String)> {
        self.guard().clone()
    }

    /// Returns the lines written to `channel`, in order.
    #[must_use]
    pub fn channel_lines(&self, channel: Channel) -> Vec<String> {
        self.guard()
            .iter()
            .filter(|(written, _)| *written == channel)
            .map(|(_, line)| line.clone())
            .collect()
    }

    /// Removes and returns all lines written so far.
    pub fn take(&self) -> Vec<(Channel, String)> {
        std::mem::take(&mut *self.guard())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.guard().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    fn push(&self, channel: Channel, line: &str) {
        self.guard().push((channel, line.to_string()));
    }
}

impl Sink for MemorySink {
    fn write_normal(&self, line: &str) -> io::Result<()> {
        self.push(Channel::Normal, line);
        Ok(())
    }

    fn write_warning(&self, line: &str) -> io::Result<()> {
        self.push(Channel::Warning, line);
        Ok(())
    }

    fn write_error(&self, line: &str) -> io::Result<()> {
        self.push(Channel::Error, line);
        Ok(())
    }
}
