//! Output sinks.
//!
//! The renderer writes bytes to an [`OutputSink`] and asks it for the
//! terminal size before each frame. [`TerminalSink`] wraps a real terminal
//! stream; [`MemorySink`] records output for headless use and tests.

use std::io::{self, Stdout, Write};

/// Destination for rendered bytes.
pub trait OutputSink {
    /// Writes all of `bytes`.
    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()>;

    /// Flushes buffered output.
    fn flush(&mut self) -> io::Result<()>;

    /// Current size in (columns, rows), or `None` if it cannot be queried.
    fn size(&self) -> Option<(u16, u16)>;
}

/// A sink over a terminal stream, sized by the controlling terminal.
#[derive(Debug)]
pub struct TerminalSink<W: Write = Stdout> {
    writer: W,
}

impl TerminalSink<Stdout> {
    /// A sink over standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalSink<W> {
    /// Wraps `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for TerminalSink<W> {
    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.writer.write_all(bytes)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    fn size(&self) -> Option<(u16, u16)> {
        match crossterm::terminal::size() {
            Ok(size) => Some(size),
            Err(err) => {
                tracing::trace!(%err, "terminal size unavailable");
                None
            }
        }
    }
}

/// A sink that records everything written to it.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    bytes: Vec<u8>,
    size: Option<(u16, u16)>,
    flushes: usize,
}

impl MemorySink {
    /// An unsized sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink reporting `width` × `height`.
    pub fn with_size(width: u16, height: u16) -> Self {
        Self {
            size: Some((width, height)),
            ..Self::default()
        }
    }

    /// Changes the reported size, as a terminal resize would.
    pub fn set_size(&mut self, width: u16, height: u16) {
        self.size = Some((width, height));
    }

    /// Everything written so far.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Everything written so far, lossily decoded.
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }

    /// Returns and clears everything written so far.
    pub fn take(&mut self) -> String {
        let bytes = std::mem::take(&mut self.bytes);
        String::from_utf8_lossy(&bytes).into_owned()
    }

    /// Number of flushes.
    pub fn flushes(&self) -> usize {
        self.flushes
    }
}

impl OutputSink for MemorySink {
    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.bytes.extend_from_slice(bytes);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }

    fn size(&self) -> Option<(u16, u16)> {
        self.size
    }
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn write_all(&mut self, bytes: &[u8]) -> io::Result<()> {
        (**self).write_all(bytes)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }

    fn size(&self) -> Option<(u16, u16)> {
        (**self).size()
    }
}
