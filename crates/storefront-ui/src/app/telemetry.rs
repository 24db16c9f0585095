//! Logging initialisation for the browser.
//!
//! # Design
//! - Core modules log through `tracing`; this installs the single subscriber.
//! - Each formatted event is forwarded to the devtools console at a matching
//!   severity. Timestamps are omitted because wasm32 has no system clock.

use gloo::console;
use std::io;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Install the console-backed subscriber. Safe to call more than once.
pub(crate) fn init_logging() {
    let installed = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .without_time()
        .try_init();
    if let Err(err) = installed {
        console::warn!("tracing subscriber already installed", err.to_string());
    }
}

#[derive(Clone, Copy, Debug)]
struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and emits it on drop.
struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    const fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buf);
        let line = text.trim_end().to_string();
        if line.is_empty() {
            return;
        }
        match self.level {
            Level::ERROR => console::error!(line),
            Level::WARN => console::warn!(line),
            _ => console::log!(line),
        }
    }
}
